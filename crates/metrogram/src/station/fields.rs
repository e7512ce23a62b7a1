//! Declarative attribute-editor fields.
//!
//! Per station type, an editor turns the current attribute record into an
//! ordered list of [`FieldSpec`]s for the external form renderer, and
//! applies a changed value back into the record. Mutations go through a
//! staging copy held by an [`AttributeSession`]; each edit writes into that
//! copy in place and then signals the owner through one `on_update` commit
//! callback. The record is never replaced wholesale.

use log::debug;

use crate::{station::StationAttrs, theme::Theme};

/// Per station type, the editing schema: a default record plus the mapping
/// between records and declarative fields.
pub trait StationEditor: Sync {
    /// The ordered fields for the current record.
    fn fields(&self, attrs: &StationAttrs) -> Vec<FieldSpec>;

    /// Writes a changed field value into the record in place.
    ///
    /// A value outside the field's declared option set, or of the wrong
    /// kind for the field, is a programming error trapped in development
    /// builds; release builds leave the record untouched.
    fn apply(&self, attrs: &mut StationAttrs, field: &str, value: FieldValue);
}

/// Current or changed value of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free multiline text.
    Text(String),
    /// One value out of a select's enumerated options.
    Choice(String),
    /// A boolean toggle.
    Toggle(bool),
    /// An opaque theme tuple from the color-picker widget.
    Theme(Theme),
}

/// One enumerated option of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    value: &'static str,
    label_key: &'static str,
    disabled: bool,
}

impl SelectOption {
    pub fn new(value: &'static str, label_key: &'static str) -> Self {
        Self {
            value,
            label_key,
            disabled: false,
        }
    }

    /// Marks the option disabled under the current cross-field constraints.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(&self) -> &'static str {
        self.value
    }

    pub fn label_key(&self) -> &'static str {
        self.label_key
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }
}

/// The kind of widget a field renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free multiline text input.
    Textarea,
    /// Single select from enumerated options.
    Select { options: Vec<SelectOption> },
    /// Boolean switch, possibly disabled by cross-field constraints.
    Switch { disabled: bool },
    /// An opaque widget the external panel interprets.
    Custom { widget: CustomWidget },
}

/// Widgets the core does not render itself.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomWidget {
    /// The theming collaborator's color picker, seeded with the type's
    /// default theme.
    ThemePicker { default: Theme },
}

/// One editable field of a station's attribute record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    key: &'static str,
    label_key: &'static str,
    kind: FieldKind,
    value: FieldValue,
}

impl FieldSpec {
    pub fn new(
        key: &'static str,
        label_key: &'static str,
        kind: FieldKind,
        value: FieldValue,
    ) -> Self {
        Self {
            key,
            label_key,
            kind,
            value,
        }
    }

    /// Stable key the editor's `apply` matches on.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Translation key for the field label; the core never hardcodes
    /// display text.
    pub fn label_key(&self) -> &'static str {
        self.label_key
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

/// An open editing session for one selected station.
///
/// The session holds a mutable staging copy of the attribute record. Each
/// field edit writes into that copy and then signals the owner via the
/// commit callback; only one editor is open per selected station at a time.
pub struct AttributeSession<'a> {
    id: &'a str,
    editor: &'a dyn StationEditor,
    staged: StationAttrs,
}

impl std::fmt::Debug for AttributeSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeSession")
            .field("id", &self.id)
            .field("staged", &self.staged)
            .finish_non_exhaustive()
    }
}

impl<'a> AttributeSession<'a> {
    /// Opens a session over a copy of the station's current record.
    pub fn open(id: &'a str, editor: &'a dyn StationEditor, attrs: &StationAttrs) -> Self {
        Self {
            id,
            editor,
            staged: attrs.clone(),
        }
    }

    /// The ordered fields for the staged record.
    pub fn fields(&self) -> Vec<FieldSpec> {
        self.editor.fields(&self.staged)
    }

    /// Applies one field edit to the staged record, then commits it to the
    /// owner through `on_update`.
    pub fn apply(
        &mut self,
        field: &str,
        value: FieldValue,
        on_update: &mut dyn FnMut(&str, &StationAttrs),
    ) {
        self.editor.apply(&mut self.staged, field, value);
        debug!(station = self.id, field; "Committing attribute edit");
        on_update(self.id, &self.staged);
    }

    /// The staged record.
    pub fn attrs(&self) -> &StationAttrs {
        &self.staged
    }
}
