pub mod dashboard;
pub mod equipment;
pub mod production;
pub mod scenario;
pub mod system;
