pub mod accounts;
pub mod resumes;
