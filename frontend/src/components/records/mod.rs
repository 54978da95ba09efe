//! Generic record list: the one management view every entity shares.
//!
//! Responsibilities
//! - Wire the Yew `Component` implementation to the submodules: state in
//!   `state.rs`, transitions and network side effects in `update.rs`,
//!   rendering in `view.rs`.
//! - Fetch the first page on mount, plus reference lists when the entity's
//!   schema needs them.
//! - React to a tenant switch (session prop change) by resetting to page 1,
//!   dropping the selection, and refetching.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub mod dialogs;

pub use messages::Msg;
pub use props::RecordListProps;
pub use state::{FormTarget, RecordListComponent};

impl Component for RecordListComponent {
    type Message = Msg;
    type Properties = RecordListProps;

    fn create(ctx: &Context<Self>) -> Self {
        RecordListComponent::new(ctx.props().entity)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Entity switches remount (the app keys this component by slug), so
        // a prop change means the session changed: a tenant switch must not
        // leak page or selection state into the new dataset.
        if ctx.props().session != old_props.session {
            self.query.page = 1;
            self.selection.clear();
            ctx.link().send_message(Msg::Fetch);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Fetch);
            if self.entity.descriptor().needs_reference_data() {
                update::load_reference_data(ctx);
            }
        }
    }
}
