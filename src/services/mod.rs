pub mod dependency_validator;
pub mod manifest_writer;
pub mod orchestrator;
pub mod parameter_checks;
pub mod template_selector;

pub use dependency_validator::validate;
pub use manifest_writer::ManifestWriter;
pub use orchestrator::Orchestrator;
pub use parameter_checks::check_parameters;
pub use template_selector::select_templates;
