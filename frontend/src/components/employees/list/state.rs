//! Component state for the employee list.
//!
//! The displayed set is a possibly stale copy of the server's collection. It
//! is only ever replaced wholesale by a fetch; deletes trigger a re-fetch
//! rather than removing rows locally.

use common::model::employee::{Employee, EmployeeId};
use common::requests::EmployeeRequest;
use yew::Callback;

pub const DELETE_PROMPT: &str = "¿Seguro que deseas eliminar este empleado?";

pub struct EmployeeListComponent {
    /// Records as returned by the last completed fetch.
    pub employees: Vec<Employee>,

    /// Number of list fetches still waiting for an answer.
    pub in_flight: usize,

    /// Guards the one fetch done on first render.
    pub loaded: bool,
}

impl EmployeeListComponent {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            in_flight: 0,
            loaded: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_fetch(&mut self) -> EmployeeRequest {
        self.in_flight += 1;
        EmployeeRequest::List
    }

    /// Whichever fetch answers last decides the displayed set.
    pub fn apply_loaded(&mut self, employees: Vec<Employee>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.employees = employees;
    }

    /// A failed fetch keeps showing the previous set.
    pub fn fetch_failed(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Hands the displayed record with `id` to the parent. Returns `false` if
    /// the row is no longer in the set.
    pub fn edit(&self, id: &EmployeeId, on_edit: &Callback<Employee>) -> bool {
        match self.employees.iter().find(|e| &e.id == id) {
            Some(employee) => {
                on_edit.emit(employee.clone());
                true
            }
            None => false,
        }
    }

    /// The delete request to send, only if the user confirmed.
    pub fn delete_request(&self, id: EmployeeId, confirmed: bool) -> Option<EmployeeRequest> {
        confirmed.then_some(EmployeeRequest::Delete(id))
    }

    /// A delete went through; the whole collection is fetched again.
    pub fn deleted(&mut self) -> EmployeeRequest {
        self.begin_fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn employee(id: &str, nombre: &str) -> Employee {
        serde_json::from_value(json!({
            "_id": id,
            "RUT_empleado": format!("RUT-{id}"),
            "id_cargo": "1",
            "nombre_empleado": nombre,
            "telefono_empleado": "555",
            "direccion_empleado": "Centro",
            "correo_electronico": format!("{id}@example.com"),
            "fecha_nacimiento": "1970-01-01",
            "EPS": "EPS-1",
            "salario": 1000,
            "tipo_contrato": "Indefinido"
        }))
        .unwrap()
    }

    #[test]
    fn starts_empty_and_unloaded() {
        let list = EmployeeListComponent::new();
        assert!(list.employees.is_empty());
        assert!(!list.loaded);
        assert!(!list.is_loading());
    }

    #[test]
    fn fetch_of_empty_collection_leaves_empty_set() {
        let mut list = EmployeeListComponent::new();
        assert_eq!(list.begin_fetch(), EmployeeRequest::List);
        assert!(list.is_loading());

        list.apply_loaded(Vec::new());
        assert!(list.employees.is_empty());
        assert!(!list.is_loading());
    }

    #[test]
    fn edit_hands_over_the_exact_record() {
        let mut list = EmployeeListComponent::new();
        list.begin_fetch();
        list.apply_loaded(vec![employee("42", "Marta")]);

        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let on_edit = Callback::from(move |e: Employee| sink.borrow_mut().push(e));

        assert!(list.edit(&EmployeeId::new("42"), &on_edit));
        assert_eq!(*received.borrow(), vec![employee("42", "Marta")]);
    }

    #[test]
    fn edit_of_vanished_row_does_nothing() {
        let list = EmployeeListComponent::new();
        let on_edit = Callback::from(|_: Employee| panic!("must not be called"));
        assert!(!list.edit(&EmployeeId::new("7"), &on_edit));
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let list = EmployeeListComponent::new();
        assert_eq!(list.delete_request(EmployeeId::new("42"), false), None);
    }

    #[test]
    fn confirmed_delete_is_addressed_by_id() {
        let list = EmployeeListComponent::new();
        let request = list.delete_request(EmployeeId::new("42"), true).unwrap();
        assert_eq!(request, EmployeeRequest::Delete(EmployeeId::new("42")));
        assert_eq!(request.path(), "/api/empleados/42");
    }

    #[test]
    fn delete_triggers_full_reload() {
        let mut list = EmployeeListComponent::new();
        list.begin_fetch();
        list.apply_loaded(vec![employee("1", "Ana"), employee("42", "Marta")]);

        assert_eq!(list.deleted(), EmployeeRequest::List);
        // Rows stay until the reload answers.
        assert_eq!(list.employees.len(), 2);

        list.apply_loaded(vec![employee("1", "Ana")]);
        assert!(list.employees.iter().all(|e| e.id != EmployeeId::new("42")));
        assert!(!list.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut list = EmployeeListComponent::new();
        list.begin_fetch();
        list.apply_loaded(vec![employee("1", "Ana")]);

        list.begin_fetch();
        list.fetch_failed();
        assert_eq!(list.employees, vec![employee("1", "Ana")]);
        assert!(!list.is_loading());
    }

    #[test]
    fn last_answer_wins_when_fetches_overlap() {
        let mut list = EmployeeListComponent::new();
        list.begin_fetch();
        list.begin_fetch();

        list.apply_loaded(vec![employee("1", "Ana")]);
        assert!(list.is_loading());
        list.apply_loaded(vec![employee("2", "Beto")]);

        assert_eq!(list.employees, vec![employee("2", "Beto")]);
        assert!(!list.is_loading());
    }
}
