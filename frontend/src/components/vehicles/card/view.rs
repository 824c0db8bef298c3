//! View rendering for the vehicle card and its maintenance dialog.
//!
//! Labels stay in Spanish, matching the operators' copy.

use common::maintenance::action::MaintenanceAction;
use common::maintenance::form::{MaintenanceForm, OpenForm};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::maintenance_dialog::MaintenanceDialog;

use super::helpers::{card_class, km_label};
use super::messages::Msg;
use super::state::VehicleCardComponent;

pub fn view(component: &VehicleCardComponent, ctx: &Context<VehicleCardComponent>) -> Html {
    let link = ctx.link();
    let vehicle = &ctx.props().vehicle;
    let id_attr = vehicle.id.map(|id| id.to_string());

    html! {
        <>
            <div class={card_class(vehicle.in_maintenance)} data-id={id_attr}>
                <div class="card">
                    { build_image(component, ctx) }
                    <div class="card-content">
                        <p>
                            <i class="material-icons">{"speed"}</i>
                            { format!(" {} ", km_label(vehicle)) }
                            <b>{" km"}</b>
                        </p>
                        <p>
                            <i class="material-icons">{"build"}</i>
                            { format!(" {}", vehicle.description) }
                        </p>
                        <p>
                            <i class="material-icons">{"event"}</i>
                            { format!(" {}", vehicle.estimate_label()) }
                        </p>
                        {
                            if let Some(person) = vehicle.visible_person() {
                                html! {
                                    <p>
                                        <i class="material-icons">{"person"}</i>
                                        { format!(" {person}") }
                                    </p>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <div class="card-action">
                        <button type="button" onclick={link.callback(|_| Msg::PrimaryAction)}>
                            { MaintenanceAction::for_vehicle(vehicle).label() }
                        </button>
                    </div>
                </div>
            </div>
            {
                match &component.form {
                    MaintenanceForm::Open(form) => build_dialog(form, link),
                    MaintenanceForm::Closed => html! {},
                }
            }
        </>
    }
}

/// Picture and title overlay. The `error` listener is detached once the
/// placeholder is in place.
fn build_image(component: &VehicleCardComponent, ctx: &Context<VehicleCardComponent>) -> Html {
    let vehicle = &ctx.props().vehicle;
    let onerror = (!component.image.fallback_applied())
        .then(|| ctx.link().callback(|_: Event| Msg::ImageFailed));

    html! {
        <div class="card-image">
            <img src={component.image.src().to_string()} alt={vehicle.make.clone()} {onerror} />
            <span class="card-title">
                <span class="card-title-wrapper">
                    {
                        if vehicle.in_maintenance {
                            html! { <i class="material-icons">{"handyman"}</i> }
                        } else {
                            html! {}
                        }
                    }
                    { format!(" {}", vehicle.title()) }
                </span>
            </span>
        </div>
    }
}

fn build_dialog(form: &OpenForm, link: &Scope<VehicleCardComponent>) -> Html {
    let error_text = form.error.map(|e| e.to_string()).unwrap_or_default();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <MaintenanceDialog content_label="Car Modal" on_close={link.callback(|_: ()| Msg::CloseDialog)}>
            <form class="col s12" {onsubmit}>
                <div class="row">
                    <label class="input-field col s6">
                        <input
                            type="text"
                            class="validate"
                            value={form.person_name.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPersonName(input_value(e)))}
                        />
                        <span>{"Nombre Persona"}</span>
                    </label>

                    <label class="input-field col s6">
                        <input
                            type="text"
                            class="validate"
                            placeholder="YYYY/MM/DD"
                            value={form.estimated_date.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetEstimatedDate(input_value(e)))}
                        />
                        <span class="helper-text">{"*Asegurese que este en formato YYYY/MM/DD"}</span>
                        <span>{"Fecha Estimada"}</span>
                    </label>
                </div>

                <p class="helper-text error-msg">{ error_text }</p>
                <button type="submit" class="waves-effect waves-light btn">{"Enviar"}</button>
            </form>
        </MaintenanceDialog>
    }
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}
