//! Markdown formatting of the review projection.

use std::fmt;

use crate::{
    models::WizardStep,
    review::{PlanReview, ReviewItem, ReviewSection},
};

impl fmt::Display for ReviewItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewItem::Field { label, value } => writeln!(f, "- **{label}**: {value}"),
            ReviewItem::Heading(title) => {
                writeln!(f)?;
                writeln!(f, "### {title}")?;
                writeln!(f)
            }
            ReviewItem::List {
                label,
                entries,
                empty,
            } => {
                if entries.is_empty() {
                    return writeln!(f, "- **{label}**: {empty}");
                }
                writeln!(f, "- **{label}**:")?;
                for entry in entries {
                    writeln!(f, "  - {entry}")?;
                }
                Ok(())
            }
            ReviewItem::Note(text) => writeln!(f, "- {text}"),
        }
    }
}

impl fmt::Display for ReviewSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} (edit: `jump {}`)",
            self.step.index() + 1,
            self.title(),
            self.step.as_str()
        )?;
        writeln!(f)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", WizardStep::Review.title())?;
        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
