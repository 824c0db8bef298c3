//! Centered modal used by vehicle cards for the maintenance form.
//!
//! The parent mounts it only while its form is open, so visibility lives in
//! the parent's state. Closing is requested through `on_close` from the ✕
//! button, a click on the backdrop, or Escape.

use uuid::Uuid;
use web_sys::HtmlElement;
use yew::prelude::*;

pub struct MaintenanceDialog {
    pub id: String,
    node_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub content_label: AttrValue,
}

impl Component for MaintenanceDialog {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("dialog-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
        let on_close_click = props.on_close.reform(|_: MouseEvent| ());
        let on_keydown = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    e.prevent_default();
                    on_close.emit(());
                }
            })
        };

        html! {
            <>
                <div class="maintenance-dialog__backdrop" onclick={on_backdrop}></div>
                <div
                    class="maintenance-dialog"
                    id={self.id.clone()}
                    ref={self.node_ref.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-label={props.content_label.clone()}
                    tabindex="-1"
                    onkeydown={on_keydown}
                >
                    <button class="maintenance-dialog__close" type="button" title="Cerrar" onclick={on_close_click}>
                        { "✕" }
                    </button>
                    { props.children.clone() }
                </div>
            </>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        // Escape only reaches the dialog once focus is inside it.
        if first_render {
            if let Some(dialog) = self.node_ref.cast::<HtmlElement>() {
                dialog.focus().ok();
            }
        }
    }
}
