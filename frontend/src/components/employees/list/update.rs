use common::model::employee::Employee;
use common::requests::EmployeeRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::notifications::{confirm, show_toast, ToastKind};

use super::messages::Msg;
use super::state::{EmployeeListComponent, DELETE_PROMPT};

pub fn update(
    component: &mut EmployeeListComponent,
    ctx: &Context<EmployeeListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Reload => {
            let request = component.begin_fetch();
            spawn_fetch(ctx, request);
            true
        }
        Msg::Loaded(employees) => {
            component.apply_loaded(employees);
            true
        }
        Msg::LoadFailed(error) => {
            component.fetch_failed();
            api::report_failure(EmployeeRequest::List.action(), &error);
            true
        }
        Msg::Edit(id) => {
            component.edit(&id, &ctx.props().on_edit);
            false
        }
        Msg::Delete(id) => {
            if let Some(request) = component.delete_request(id, confirm(DELETE_PROMPT)) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::execute(&request).await {
                        Ok(_) => link.send_message(Msg::Deleted),
                        Err(error) => link.send_message(Msg::DeleteFailed {
                            action: request.action(),
                            error,
                        }),
                    }
                });
            }
            false
        }
        Msg::Deleted => {
            show_toast("Empleado eliminado", ToastKind::Info);
            let request = component.deleted();
            spawn_fetch(ctx, request);
            true
        }
        Msg::DeleteFailed { action, error } => {
            api::report_failure(action, &error);
            false
        }
    }
}

fn spawn_fetch(ctx: &Context<EmployeeListComponent>, request: EmployeeRequest) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::send::<Vec<Employee>>(&request).await {
            Ok(employees) => link.send_message(Msg::Loaded(employees)),
            Err(error) => link.send_message(Msg::LoadFailed(error)),
        }
    });
}
