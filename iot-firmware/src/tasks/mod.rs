// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks teilen sich die Konsole über SharedConsole, das Blinkmuster
// kommt über den PatternChannel (main → LED).

pub mod console;
pub mod heartbeat;
pub mod indicator;

// Re-export Tasks für einfachen Import
pub use console::wait_for_user_input;
pub use heartbeat::heartbeat_task;
pub use indicator::indicator_task;
