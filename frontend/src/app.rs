use crate::components::vehicles::list::VehicleListComponent;
use crate::config::api_config;
use common::config::ApiConfig;
use yew::{html, Component, Context, Html};

pub struct App {
    config: ApiConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: api_config(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="App">
                <header class="App-header"></header>
                <VehicleListComponent config={self.config.clone()} />
            </div>
        }
    }
}
