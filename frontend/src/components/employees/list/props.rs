use common::model::employee::Employee;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeListProps {
    /// Receives the full record of the row whose "Editar" button was clicked.
    pub on_edit: Callback<Employee>,
}
