//! Contact form submission.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::PageContext;
use super::dom;
use crate::consts::{CONTACT_FORM_ID, FORM_RESPONSE_ID};
use crate::error::EffectsError;
use crate::net::contact::{ContactTransport, deliver};
use crate::state::form::{Banner, ContactField, ContactFields, ContactForm, SubmitStep};

/// The four input elements, in [`ContactField::ALL`] order.
struct FieldInputs {
    name: Element,
    email: Element,
    subject: Element,
    message: Element,
}

impl FieldInputs {
    fn find(ctx: &PageContext) -> Result<Self, EffectsError> {
        Ok(Self {
            name: dom::by_id(&ctx.document, ContactField::Name.element_id())?,
            email: dom::by_id(&ctx.document, ContactField::Email.element_id())?,
            subject: dom::by_id(&ctx.document, ContactField::Subject.element_id())?,
            message: dom::by_id(&ctx.document, ContactField::Message.element_id())?,
        })
    }

    fn read(&self) -> ContactFields {
        ContactFields {
            name: field_value(&self.name),
            email: field_value(&self.email),
            subject: field_value(&self.subject),
            message: field_value(&self.message),
        }
    }
}

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        el.text_content().unwrap_or_default()
    }
}

pub fn register(ctx: &PageContext) -> Result<(), EffectsError> {
    let form_el: HtmlFormElement = dom::by_id_as(&ctx.document, CONTACT_FORM_ID)?;
    let banner_el: HtmlElement = dom::by_id_as(&ctx.document, FORM_RESPONSE_ID)?;
    let inputs = FieldInputs::find(ctx)?;
    let state = Rc::new(RefCell::new(ContactForm::new(ctx.config.success_hide_ms)));
    let transport = Rc::new(ContactTransport::from_config(&ctx.config));
    log::debug!("contact transport: {transport:?}");

    let target = form_el.clone();
    dom::listen(&target, "submit", move |ev| {
        ev.prevent_default();
        let step = state.borrow_mut().begin_submit(&inputs.read());
        match step {
            SubmitStep::Busy => log::debug!("contact form already sending"),
            SubmitStep::Invalid { error, banner } => {
                log::info!("contact form rejected: {error}");
                show_banner(&banner_el, &banner, &state);
            }
            SubmitStep::Send { message, banner } => {
                show_banner(&banner_el, &banner, &state);
                let state = Rc::clone(&state);
                let banner_el = banner_el.clone();
                let form_el = form_el.clone();
                let transport = Rc::clone(&transport);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = deliver(&transport, &message).await;
                    if let Err(e) = &result {
                        log::error!("contact delivery failed: {e}");
                    }
                    let done = state.borrow_mut().complete(&result);
                    if done.reset_form {
                        form_el.reset();
                    }
                    show_banner(&banner_el, &done.banner, &state);
                });
            }
        }
    })
}

fn show_banner(el: &HtmlElement, banner: &Banner, state: &Rc<RefCell<ContactForm>>) {
    el.set_text_content(Some(banner.message));
    el.set_class_name(banner.kind.css_class());
    dom::set_style(el, "display", "block");

    if let Some(ms) = banner.auto_hide_ms {
        let el = el.clone();
        let state = Rc::clone(state);
        let seq = banner.seq;
        Timeout::new(ms, move || {
            if state.borrow_mut().hide_banner(seq) {
                dom::set_style(&el, "display", "none");
            }
        })
        .forget();
    }
}
