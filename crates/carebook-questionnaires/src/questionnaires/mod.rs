pub mod parental_provider;
pub mod staff_service;

/// Named option sets shared by both forms.
pub(crate) mod options {
    pub const YES_NO_SOMETIMES: &[&str] = &["Yes", "No", "Sometimes"];
    pub const YES_NO_PARTIALLY: &[&str] = &["Yes", "No", "Partially"];
    pub const YES_NO_SOMEWHAT: &[&str] = &["Yes", "No", "Somewhat"];
    pub const YES_NO_NOT_SURE: &[&str] = &["Yes", "No", "Not sure"];
    pub const YES_NO_UNDECIDED: &[&str] = &["Yes", "No", "Undecided"];
    pub const ALWAYS_SOMETIMES_RARELY: &[&str] = &["Always", "Sometimes", "Rarely"];
    pub const EVV_EASE: &[&str] = &["Yes", "No", "Sometimes", "Needs improvement"];
    pub const COMPENSATION: &[&str] = &["Great", "Fair", "Unfair", "Needs improvement"];
}
