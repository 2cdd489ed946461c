use common::model::employee::Employee;
use yew::{html, Component, Context, Html};

use crate::components::employees::form::EmployeeFormComponent;
use crate::components::employees::list::EmployeeListComponent;

/// Which record, if any, the form is editing. `None` means create mode.
///
/// `generation` counts every select and clear, so the form can tell a fresh
/// selection of an equal record (e.g. after a reload) from no change at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    employee: Option<Employee>,
    generation: u64,
}

impl Selection {
    pub fn select(&mut self, employee: Employee) {
        self.employee = Some(employee);
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.employee = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn current(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub enum Msg {
    Edit(Employee),
    SaveComplete,
}

/// Top-level container: owns the selection and wires the form and the list.
pub struct App {
    selection: Selection,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selection: Selection::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(employee) => self.selection.select(employee),
            Msg::SaveComplete => self.selection.clear(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div style="margin: 20px;">
                <h1>{"Gestión de Empleados"}</h1>
                <EmployeeFormComponent
                    employee_to_edit={self.selection.current().cloned()}
                    selection_generation={self.selection.generation()}
                    on_save_complete={link.callback(|_| Msg::SaveComplete)}
                />
                <hr />
                <EmployeeListComponent on_edit={link.callback(Msg::Edit)} />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::employee::{EmployeeField, EmployeeId};
    use serde_json::json;

    fn employee_42() -> Employee {
        serde_json::from_value(json!({
            "_id": "42",
            "RUT_empleado": "9.876.543-2",
            "id_cargo": "8",
            "nombre_empleado": "Rosa Díaz",
            "telefono_empleado": "555-4242",
            "direccion_empleado": "Pasaje 4",
            "correo_electronico": "rosa@example.com",
            "fecha_nacimiento": "1992-12-24",
            "EPS": "Compensar",
            "salario": 72000.5,
            "tipo_contrato": "Honorarios"
        }))
        .unwrap()
    }

    #[test]
    fn starts_in_create_mode() {
        assert_eq!(Selection::default().current(), None);
    }

    #[test]
    fn edit_then_save_complete_toggles_selection() {
        let mut selection = Selection::default();
        selection.select(employee_42());
        assert_eq!(
            selection.current().map(|e| &e.id),
            Some(&EmployeeId::new("42"))
        );

        selection.clear();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn every_select_and_clear_is_a_new_generation() {
        let mut selection = Selection::default();
        selection.select(employee_42());
        let first = selection.generation();

        selection.select(employee_42());
        assert_eq!(selection.current(), Some(&employee_42()));
        assert_ne!(selection.generation(), first);

        let before_clear = selection.generation();
        selection.clear();
        assert_ne!(selection.generation(), before_clear);
    }

    #[tokio::test]
    async fn renders_form_in_create_mode_and_empty_list() {
        let html = yew::ServerRenderer::<App>::new().render().await;

        assert!(html.contains("Gestión de Empleados"));
        assert!(html.contains("Agregar Empleado"));
        assert!(html.contains("No hay empleados registrados."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn selected_record_flows_into_the_form() {
        let mut selection = Selection::default();
        let mut form = EmployeeFormComponent::new(selection.current());
        assert!(form.fields.is_empty());

        selection.select(employee_42());
        form.sync_selection(selection.current());
        assert_eq!(form.fields.get(EmployeeField::Nombre), "Rosa Díaz");
        assert_eq!(form.fields.get(EmployeeField::Salario), "72000.5");

        selection.clear();
        form.sync_selection(selection.current());
        assert!(form.fields.is_empty());
    }
}
