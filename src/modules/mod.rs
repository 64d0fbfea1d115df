pub mod courses;
pub mod members;
pub mod offers;
pub mod semesters;
pub mod tasks;
pub mod users;
