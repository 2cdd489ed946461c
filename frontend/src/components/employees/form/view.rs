//! View rendering for the employee form.
//!
//! One `<input required>` per `EmployeeField`, in display order. The heading and
//! the submit label switch between "Agregar"/"Guardar" and "Editar"/"Actualizar"
//! depending on whether a record is selected.

use common::model::employee::EmployeeField;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EmployeeFormComponent;

pub fn view(component: &EmployeeFormComponent, ctx: &Context<EmployeeFormComponent>) -> Html {
    let link = ctx.link();
    let editing = ctx.props().employee_to_edit.is_some();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="employee-form" {onsubmit}>
            <h2>{ if editing { "Editar Empleado" } else { "Agregar Empleado" } }</h2>

            { for EmployeeField::ALL.into_iter().map(|field| field_input(component, link, field)) }

            <button type="submit" disabled={component.is_saving()}>
                {
                    if component.is_saving() {
                        "Guardando..."
                    } else if editing {
                        "Actualizar"
                    } else {
                        "Guardar"
                    }
                }
            </button>
            {
                if editing {
                    html! {
                        <button
                            type="button"
                            style="margin-left: 10px;"
                            onclick={link.callback(|_| Msg::Cancel)}
                        >
                            { "Cancelar" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

fn field_input(
    component: &EmployeeFormComponent,
    link: &Scope<EmployeeFormComponent>,
    field: EmployeeField,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });

    html! {
        <input
            key={field.key()}
            name={field.key()}
            type={field.input_type()}
            placeholder={field.label()}
            value={component.fields.get(field).to_string()}
            step={(field == EmployeeField::Salario).then_some("any")}
            min={(field == EmployeeField::Salario).then_some("0")}
            {oninput}
            required=true
        />
    }
}
