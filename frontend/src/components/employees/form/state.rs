//! Component state for the employee form.
//!
//! The form owns one text buffer per field and remembers whether a save is in
//! flight. Everything here is plain Rust so the create/edit rules can be
//! exercised without a browser; `update.rs` adds the network and DOM effects.

use common::model::employee::{
    Employee, EmployeeField, EmployeeFields, EmployeeId, ValidationError,
};
use common::requests::EmployeeRequest;
use yew::Callback;

/// The save in flight and the record it targets, fixed at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(EmployeeId),
}

impl SaveMode {
    /// Whether the form is still showing what this save was submitted from.
    fn matches(&self, editing: Option<&Employee>) -> bool {
        match (self, editing) {
            (SaveMode::Create, None) => true,
            (SaveMode::Update(id), Some(employee)) => &employee.id == id,
            _ => false,
        }
    }
}

pub struct EmployeeFormComponent {
    /// Current content of every input.
    pub fields: EmployeeFields,

    /// `Some` while a create/update request has not answered yet.
    pub pending: Option<SaveMode>,
}

impl EmployeeFormComponent {
    pub fn new(editing: Option<&Employee>) -> Self {
        Self {
            fields: editing.map(EmployeeFields::from).unwrap_or_default(),
            pending: None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    /// Fills every buffer from the selected record, or clears them all when
    /// the selection went away.
    pub fn sync_selection(&mut self, editing: Option<&Employee>) {
        self.fields = editing.map(EmployeeFields::from).unwrap_or_default();
    }

    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        self.fields.set(field, value);
    }

    /// Validates the buffers and builds the request to send.
    ///
    /// Returns `Ok(None)` when a save is already in flight. On success the form
    /// is marked as saving until [`complete_save`](Self::complete_save) or
    /// [`fail_save`](Self::fail_save) is called.
    pub fn begin_submit(
        &mut self,
        editing: Option<&Employee>,
    ) -> Result<Option<EmployeeRequest>, ValidationError> {
        if self.is_saving() {
            return Ok(None);
        }
        let data = self.fields.parse()?;
        self.pending = Some(match editing {
            Some(employee) => SaveMode::Update(employee.id.clone()),
            None => SaveMode::Create,
        });
        Ok(Some(EmployeeRequest::save(editing.map(|e| &e.id), data)))
    }

    /// Handles a successful save: `notify` receives the confirmation naming
    /// the record, then `on_done` fires once.
    ///
    /// If the selection moved on while the request was in flight (`editing` is
    /// no longer what was submitted), only `notify` runs: the buffers and the
    /// new selection belong to the record now being edited. A stray answer
    /// with no save in flight is ignored.
    pub fn complete_save(
        &mut self,
        saved: &Employee,
        editing: Option<&Employee>,
        notify: impl FnOnce(&str),
        on_done: &Callback<()>,
    ) {
        let Some(mode) = self.pending.take() else {
            return;
        };
        let verb = match mode {
            SaveMode::Create => "creado",
            SaveMode::Update(_) => "actualizado",
        };
        notify(&format!("Empleado {} {}", saved.data.nombre_empleado, verb));
        if mode.matches(editing) {
            self.fields = EmployeeFields::default();
            on_done.emit(());
        }
    }

    /// Leaves the buffers untouched so the user can retry.
    pub fn fail_save(&mut self) {
        self.pending = None;
    }
}
