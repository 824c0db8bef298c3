//! Update function for the vehicle card.
//!
//! Both request paths share `send_update`; they differ only in how a failure
//! is surfaced. The form path shows the server message inline and stays
//! open, the removal path raises a blocking alert. Nothing is retried.

use common::maintenance::action::MaintenanceAction;
use common::maintenance::validation::FormError;
use common::requests::UpdateVehicleRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{update_vehicle, ApiError};

use super::helpers::{alert, today};
use super::messages::Msg;
use super::state::VehicleCardComponent;

pub fn update(
    component: &mut VehicleCardComponent,
    ctx: &Context<VehicleCardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::PrimaryAction => {
            if MaintenanceAction::for_vehicle(&ctx.props().vehicle).opens_dialog() {
                component.form.open();
                true
            } else {
                send_update(ctx, UpdateVehicleRequest::end_maintenance(), Msg::RemoveFailed);
                false
            }
        }
        Msg::CloseDialog => {
            component.form.close();
            true
        }
        Msg::SetPersonName(value) => {
            component.form.set_person_name(value);
            true
        }
        Msg::SetEstimatedDate(value) => {
            component.form.set_estimated_date(value);
            true
        }
        Msg::Submit => {
            if let Some(body) = component.form.submit(today()) {
                send_update(ctx, body, Msg::SubmitFailed);
            }
            true
        }
        Msg::SubmitFailed(err) => {
            gloo_console::error!(format!("maintenance update failed: {err}"));
            component.form.fail_with_server_error();
            true
        }
        Msg::RemoveFailed(err) => {
            gloo_console::error!(format!("maintenance removal failed: {err}"));
            alert(&FormError::Server.to_string());
            false
        }
        Msg::Updated => {
            component.form.close();
            ctx.props().on_updated.emit(());
            true
        }
        Msg::ImageFailed => component.image.on_load_error(),
    }
}

fn send_update(
    ctx: &Context<VehicleCardComponent>,
    body: UpdateVehicleRequest,
    on_error: fn(ApiError) -> Msg,
) {
    let link = ctx.link().clone();
    let config = ctx.props().config.clone();
    let id = ctx.props().vehicle.id;
    spawn_local(async move {
        match update_vehicle(&config, id, &body).await {
            Ok(()) => link.send_message(Msg::Updated),
            Err(err) => link.send_message(on_error(err)),
        }
    });
}
