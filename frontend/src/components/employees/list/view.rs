//! View rendering for the employee list.
//!
//! An empty collection shows a single message instead of the table. Column
//! headers and cells come from `EmployeeField::ALL`, the same order the form uses.

use common::model::employee::{Employee, EmployeeField};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EmployeeListComponent;

pub fn view(component: &EmployeeListComponent, ctx: &Context<EmployeeListComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="employee-list">
            <h2>{"Lista de Empleados"}</h2>
            <button onclick={link.callback(|_| Msg::Reload)} disabled={component.is_loading()}>
                {"Recargar"}
            </button>
            {
                if component.is_loading() {
                    html! { <p>{"Cargando..."}</p> }
                } else {
                    html! {}
                }
            }
            {
                if component.employees.is_empty() {
                    html! { <p>{"No hay empleados registrados."}</p> }
                } else {
                    build_table(component, link)
                }
            }
        </div>
    }
}

fn build_table(component: &EmployeeListComponent, link: &Scope<EmployeeListComponent>) -> Html {
    html! {
        <table border="1" cellpadding="5">
            <thead>
                <tr>
                    { for EmployeeField::ALL.into_iter().map(|field| html! { <th>{ field.label() }</th> }) }
                    <th>{"Acciones"}</th>
                </tr>
            </thead>
            <tbody>
                { for component.employees.iter().map(|employee| build_row(employee, link)) }
            </tbody>
        </table>
    }
}

fn build_row(employee: &Employee, link: &Scope<EmployeeListComponent>) -> Html {
    let edit_id = employee.id.clone();
    let delete_id = employee.id.clone();

    html! {
        <tr key={employee.id.as_str().to_string()}>
            { for EmployeeField::ALL.into_iter().map(|field| html! { <td>{ field.display(&employee.data) }</td> }) }
            <td>
                <button onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}>
                    {"Editar"}
                </button>
                <button
                    onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}
                    style="margin-left: 10px;"
                >
                    {"Eliminar"}
                </button>
            </td>
        </tr>
    }
}
