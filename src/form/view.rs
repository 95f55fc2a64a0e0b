use crate::config::Config;
use crate::convert::types::UnitKind;
use crate::form::row::SectionRow;
use crate::form::state::ConverterForm;

const ROW_INDENT: &str = "  ";

/// Text rendering of the form, laid out by `Config`
pub struct FormView<'a> {
    form: &'a ConverterForm,
    config: &'a Config,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a ConverterForm, config: &'a Config) -> Self {
        Self { form, config }
    }

    /// Title, then every configured section separated by blank lines
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.config.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.config.title.chars().count()));
        out.push('\n');

        for kind in &self.config.sections {
            out.push('\n');
            out.push_str(&self.render_section(*kind));
        }
        out
    }

    /// Section header followed by one row per unit
    pub fn render_section(&self, kind: UnitKind) -> String {
        let mut out = String::new();
        out.push_str(kind.title());
        out.push('\n');

        for unit in kind.units() {
            let display = self.form.display_value(*unit);
            let row = SectionRow::new(*unit, &display, self.config.display.label_width);
            out.push_str(ROW_INDENT);
            out.push_str(&row.render());
            out.push('\n');
        }
        out
    }
}
