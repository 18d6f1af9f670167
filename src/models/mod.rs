pub mod brands;
pub mod collaborations;
pub mod contracts;
pub mod creators;
pub mod inquiries;
pub mod inquiry_templates;
pub mod messages;
pub mod milestones;
pub mod subtasks;
pub mod tasks;
