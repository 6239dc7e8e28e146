// ============================================================================
// CONDOLENCE CARD VIEW - Tarjeta de un mensaje de condolencia
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::events::on_click;
use crate::dom::{append_child, set_class_name, set_text_content, ElementBuilder};
use crate::models::CondolenceEntry;
use crate::utils::constants::CONDOLENCE_IMAGE_DIR;
use crate::utils::text::nl2br;
use crate::viewmodels::{CondolenceViewModel, MessageDisplay};

/// Renderizar la tarjeta de una condolencia
pub fn render_condolence_card(
    entry: &CondolenceEntry,
    on_image_click: Rc<dyn Fn(String, String)>,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("condolence-card").build();

    // Header: nombre (via text content, nunca como markup) + fecha
    let header = ElementBuilder::new("div")?
        .class("condolence-header")
        .build();
    let name = ElementBuilder::new("strong")?.text(&entry.name).build();
    let date = ElementBuilder::new("span")?
        .class("date")
        .text(&CondolenceViewModel::format_date(entry.created_date))
        .build();
    append_child(&header, &name)?;
    append_child(&header, &date)?;
    append_child(&card, &header)?;

    // Mensaje: escapado PRIMERO, luego saltos de línea a <br>
    let initial_display = if CondolenceViewModel::needs_truncation(&entry.message) {
        Some(MessageDisplay::Truncated)
    } else {
        None
    };

    let message_class = initial_display
        .map(|d| d.message_class())
        .unwrap_or("condolence-message");
    let message = ElementBuilder::new("p")?
        .class(message_class)
        .html(&nl2br(&entry.message))
        .build();
    append_child(&card, &message)?;

    // Control de expandir/colapsar, solo para mensajes largos
    if let Some(display) = initial_display {
        let toggle = ElementBuilder::new("a")?
            .attr("href", "javascript:void(0)")?
            .class("expand-toggle")
            .text(display.control_label())
            .build();

        {
            let state = Rc::new(RefCell::new(display));
            let message_el = message.clone();
            let toggle_el = toggle.clone();
            on_click(&toggle, move |_| {
                let next = state.borrow().toggled();
                *state.borrow_mut() = next;
                set_class_name(&message_el, next.message_class());
                set_text_content(&toggle_el, next.control_label());
            })?;
        }

        append_child(&card, &toggle)?;
    }

    // Miniatura de imagen, si la condolencia trae una
    if let Some(image) = &entry.image {
        let image_path = format!("{}/{}", CONDOLENCE_IMAGE_DIR, image);
        let alt = format!("Shared memory from {}", entry.name);

        let wrapper = ElementBuilder::new("div")?
            .class("condolence-image")
            .build();
        let img = ElementBuilder::new("img")?
            .attr("src", &image_path)?
            .attr("loading", "lazy")?
            .attr("alt", &alt)?
            .build();

        {
            let viewer_alt = format!("Memory from {}", entry.name);
            let on_image_click = on_image_click.clone();
            on_click(&img, move |_| {
                on_image_click(image_path.clone(), viewer_alt.clone());
            })?;
        }

        append_child(&wrapper, &img)?;
        append_child(&card, &wrapper)?;
    }

    Ok(card)
}
