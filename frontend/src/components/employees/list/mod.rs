//! Employee list: fetches the whole collection on first render and shows it as
//! a table with per-row edit and delete actions.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EmployeeListProps;
pub use state::EmployeeListComponent;

impl Component for EmployeeListComponent {
    type Message = Msg;
    type Properties = EmployeeListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        EmployeeListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Reload);
        }
    }
}
