//! Defines the properties for the `EmployeeFormComponent`.

use common::model::employee::Employee;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeFormProps {
    /// Record being edited. `None` puts the form in create mode.
    #[prop_or_default]
    pub employee_to_edit: Option<Employee>,

    /// Bumped by the parent on every select or clear, even when the record is
    /// equal to the previous one. Each new value refills (or clears) all field
    /// buffers once.
    #[prop_or_default]
    pub selection_generation: u64,

    /// Fired exactly once after a successful save, and when the user cancels
    /// an edit. The parent answers by clearing its selection.
    pub on_save_complete: Callback<()>,
}

impl EmployeeFormProps {
    /// Whether these props carry a different selection than `old`. The
    /// callback is ignored since parents rebuild it on every render.
    pub fn selection_changed(&self, old: &Self) -> bool {
        self.selection_generation != old.selection_generation
            || self.employee_to_edit != old.employee_to_edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employee() -> Employee {
        serde_json::from_value(json!({
            "_id": "42",
            "RUT_empleado": "1-9",
            "id_cargo": "2",
            "nombre_empleado": "Eva Mora",
            "telefono_empleado": "555",
            "direccion_empleado": "Norte 5",
            "correo_electronico": "eva@example.com",
            "fecha_nacimiento": "2000-01-01",
            "EPS": "EPS-2",
            "salario": 900,
            "tipo_contrato": "Indefinido"
        }))
        .unwrap()
    }

    fn props(employee_to_edit: Option<Employee>, selection_generation: u64) -> EmployeeFormProps {
        EmployeeFormProps {
            employee_to_edit,
            selection_generation,
            on_save_complete: Callback::from(|_| ()),
        }
    }

    #[test]
    fn new_callback_alone_is_not_a_new_selection() {
        let old = props(Some(employee()), 3);
        let new = props(Some(employee()), 3);
        assert!(old != new);
        assert!(!new.selection_changed(&old));
    }

    #[test]
    fn selecting_a_record_is_a_change() {
        let old = props(None, 0);
        let new = props(Some(employee()), 1);
        assert!(new.selection_changed(&old));
    }

    #[test]
    fn reselecting_an_equal_record_is_a_change() {
        let old = props(Some(employee()), 1);
        let new = props(Some(employee()), 2);
        assert!(new.selection_changed(&old));
    }

    #[test]
    fn clearing_is_a_change() {
        let old = props(Some(employee()), 1);
        let new = props(None, 2);
        assert!(new.selection_changed(&old));
    }
}
