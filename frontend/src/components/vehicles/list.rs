//! Vehicle list loader.
//!
//! Fetches `GET /cars` after the first render and holds the result as the
//! only source of what is drawn. Cards report successful updates through
//! `on_updated`, which triggers the same fetch again and replaces the list.
//! A failed fetch is logged; the list already held (empty on first load)
//! stays on screen.

use common::config::ApiConfig;
use common::model::vehicle::{card_keys, Vehicle};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_vehicles, ApiError};
use crate::components::vehicles::card::VehicleCardComponent;

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

pub enum Msg {
    Load,
    Fetched(Result<Vec<Vehicle>, ApiError>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct VehicleListProps {
    pub config: ApiConfig,
}

pub struct VehicleListComponent {
    vehicles: Vec<Vehicle>,
    loaded: bool,
}

impl VehicleListComponent {
    fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            loaded: false,
        }
    }

    /// Replaces the held list on success and returns its length. On failure
    /// the current list is left as is and the error handed back for logging.
    fn apply_fetch(&mut self, outcome: Result<Vec<Vehicle>, ApiError>) -> Result<usize, ApiError> {
        let vehicles = outcome?;
        self.vehicles = vehicles;
        Ok(self.vehicles.len())
    }
}

impl Component for VehicleListComponent {
    type Message = Msg;
    type Properties = VehicleListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                let config = ctx.props().config.clone();
                spawn_local(async move {
                    link.send_message(Msg::Fetched(fetch_vehicles(&config).await));
                });
                false
            }
            Msg::Fetched(outcome) => match self.apply_fetch(outcome) {
                Ok(count) => {
                    gloo_console::log!(format!("loaded {count} vehicles"));
                    true
                }
                Err(err) => {
                    gloo_console::error!(format!("failed to load vehicles: {err}"));
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config.clone();
        let on_updated = ctx.link().callback(|_: ()| Msg::Load);
        let keys = card_keys(&self.vehicles);

        html! {
            <div class="container">
                <div class="row">
                    <h3>{ "Carros en Mantenimiento" }</h3>
                </div>
                <div class="row">
                    {
                        for keys.into_iter().zip(&self.vehicles).map(|(key, vehicle)| html! {
                            <VehicleCardComponent
                                key={key}
                                vehicle={vehicle.clone()}
                                config={config.clone()}
                                on_updated={on_updated.clone()}
                            />
                        })
                    }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
