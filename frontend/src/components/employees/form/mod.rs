//! Employee form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export `Msg`, `EmployeeFormProps` and `EmployeeFormComponent`.
//! - Re-synchronize the field buffers once each time the parent makes a new
//!   selection (edit mode fills them, `None` clears them).

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EmployeeFormProps;
pub use state::EmployeeFormComponent;

impl Component for EmployeeFormComponent {
    type Message = Msg;
    type Properties = EmployeeFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        EmployeeFormComponent::new(ctx.props().employee_to_edit.as_ref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Callbacks are rebuilt on every parent render; only a new selection resyncs.
        if ctx.props().selection_changed(old_props) {
            self.sync_selection(ctx.props().employee_to_edit.as_ref());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
