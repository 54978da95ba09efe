//! Record form dialog: modal create/edit editor for one record.
//!
//! Wires the `Component` implementation to the submodules; the draft is
//! seeded once on mount from the props (the parent remounts the dialog per
//! open, so a fresh open always starts from a clean draft).

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecordFormProps;
pub use state::RecordFormComponent;

impl Component for RecordFormComponent {
    type Message = Msg;
    type Properties = RecordFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        RecordFormComponent::new(ctx.props().entity, ctx.props().record.as_ref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
