//! Update function for the employee form.
//!
//! Follows the same Elm-style contract as the other components: mutate the
//! state for `msg`, spawn any request, and return whether to re-render.

use common::model::employee::Employee;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::notifications::{show_toast, ToastKind};

use super::messages::Msg;
use super::state::EmployeeFormComponent;

pub fn update(
    component: &mut EmployeeFormComponent,
    ctx: &Context<EmployeeFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(field, value) => {
            component.set_field(field, value);
            true
        }
        Msg::Submit => match component.begin_submit(ctx.props().employee_to_edit.as_ref()) {
            Ok(Some(request)) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::send::<Employee>(&request).await {
                        Ok(saved) => link.send_message(Msg::Saved(saved)),
                        Err(error) => link.send_message(Msg::SaveFailed {
                            action: request.action(),
                            error,
                        }),
                    }
                });
                true
            }
            Ok(None) => false,
            Err(invalid) => {
                show_toast(&invalid.to_string(), ToastKind::Error);
                false
            }
        },
        Msg::Saved(saved) => {
            component.complete_save(
                &saved,
                ctx.props().employee_to_edit.as_ref(),
                |message| show_toast(message, ToastKind::Info),
                &ctx.props().on_save_complete,
            );
            true
        }
        Msg::SaveFailed { action, error } => {
            component.fail_save();
            api::report_failure(action, &error);
            true
        }
        Msg::Cancel => {
            ctx.props().on_save_complete.emit(());
            false
        }
    }
}
