//! Vehicle card: one vehicle's summary plus its maintenance toggle.
//!
//! Responsibilities
//! - Render make/model, mileage, note, estimated date and, while in
//!   maintenance, the assigned person.
//! - Offer exactly one primary action. Removing from maintenance sends the
//!   update at once; putting into maintenance opens the form dialog.
//! - After a successful update, ask the list to re-fetch through
//!   `on_updated`. Local state starts over when the vehicle prop changes.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::VehicleCardProps;
pub use state::VehicleCardComponent;

impl Component for VehicleCardComponent {
    type Message = Msg;
    type Properties = VehicleCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        VehicleCardComponent::new(&ctx.props().vehicle)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.vehicle != ctx.props().vehicle {
            *self = VehicleCardComponent::new(&ctx.props().vehicle);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
