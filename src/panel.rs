//! DOM parameter panel: sliders, colour pickers and a "Load Scene" button.

use std::{cell::RefCell, rc::Rc};

use web_sys::{
    wasm_bindgen::{JsCast, JsValue},
    Document, Element, HtmlInputElement,
};

use crate::{
    controls::{Controls, Range, Rgb, AMPLITUDE_RANGE, FREQUENCY_RANGE, WAVELENGTH_RANGE},
    error::Error,
    event_callback::EventCallback,
    gl::ColorSlot,
    utils::{get_document, get_element_by_id_or_body},
};

const PANEL_STYLE: &str = "position: absolute; top: 0; right: 0; padding: 8px; \
     background: rgba(0, 0, 0, 0.6); color: #eee; font: 12px sans-serif;";

const ROW_STYLE: &str = "display: flex; justify-content: space-between; gap: 8px; margin: 4px 0;";

/// A slider-backed parameter.
#[derive(Debug, Clone, Copy)]
enum Parameter {
    Frequency,
    Amplitude,
    Wavelength,
}

impl Parameter {
    const ALL: [Parameter; 3] = [
        Parameter::Frequency,
        Parameter::Amplitude,
        Parameter::Wavelength,
    ];

    fn label(self) -> &'static str {
        match self {
            Parameter::Frequency => "Frequency",
            Parameter::Amplitude => "Amplitude",
            Parameter::Wavelength => "Wave Length",
        }
    }

    fn range(self) -> Range {
        match self {
            Parameter::Frequency => FREQUENCY_RANGE,
            Parameter::Amplitude => AMPLITUDE_RANGE,
            Parameter::Wavelength => WAVELENGTH_RANGE,
        }
    }

    fn value_mut(self, controls: &mut Controls) -> &mut f32 {
        match self {
            Parameter::Frequency => &mut controls.frequency,
            Parameter::Amplitude => &mut controls.amplitude,
            Parameter::Wavelength => &mut controls.wavelength,
        }
    }
}

fn color_label(slot: ColorSlot) -> &'static str {
    match slot {
        ColorSlot::Inner => "Inner Color",
        ColorSlot::Outer1 => "Outer Color 1",
        ColorSlot::Outer2 => "Outer Color 2",
        ColorSlot::Outer3 => "Outer Color 3",
        ColorSlot::Background => "Background",
    }
}

/// Formats a colour the way `<input type="color">` expects it.
pub fn format_hex([r, g, b]: Rgb) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parses a `#rrggbb` colour.
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// The parameter panel.
///
/// Every input writes straight into the shared [`Controls`]; the driver reads
/// them once per frame. Listeners are removed when the panel is dropped.
#[derive(Debug)]
pub struct ControlPanel {
    root: Element,
    _callbacks: Vec<EventCallback<web_sys::Event>>,
}

impl ControlPanel {
    /// Builds the panel under the element with `parent_id`, or `<body>`.
    pub fn new(parent_id: Option<&str>, controls: Rc<RefCell<Controls>>) -> Result<Self, Error> {
        let document = get_document()?;
        let root = document.create_element("div")?;
        root.set_id("controls");
        root.set_attribute("style", PANEL_STYLE)?;

        let mut callbacks = Vec::new();
        callbacks.push(Self::add_button(&document, &root, controls.clone())?);
        for parameter in Parameter::ALL {
            callbacks.push(Self::add_slider(&document, &root, parameter, controls.clone())?);
        }
        for slot in ColorSlot::ALL {
            callbacks.push(Self::add_color(&document, &root, slot, controls.clone())?);
        }

        get_element_by_id_or_body(parent_id)?.append_child(&root)?;
        log::debug!("control panel ready with {} inputs", callbacks.len());

        Ok(Self {
            root,
            _callbacks: callbacks,
        })
    }

    /// Returns the panel's root element.
    pub fn element(&self) -> &Element {
        &self.root
    }

    fn add_button(
        document: &Document,
        root: &Element,
        controls: Rc<RefCell<Controls>>,
    ) -> Result<EventCallback<web_sys::Event>, Error> {
        let button = document.create_element("button")?;
        button.set_text_content(Some("Load Scene"));
        root.append_child(&button)?;

        EventCallback::new_form(button, &["click"], move |_| {
            log::info!("scene reload requested");
            controls.borrow_mut().request_reload();
        })
    }

    fn add_slider(
        document: &Document,
        root: &Element,
        parameter: Parameter,
        controls: Rc<RefCell<Controls>>,
    ) -> Result<EventCallback<web_sys::Event>, Error> {
        let range = parameter.range();
        let current = *parameter.value_mut(&mut controls.borrow_mut());

        let input = create_input(document, "range")?;
        input.set_min(&range.min.to_string());
        input.set_max(&range.max.to_string());
        input.set_step(&range.step.to_string());
        input.set_value(&current.to_string());
        append_row(document, root, parameter.label(), &input)?;

        let source = input.clone();
        EventCallback::new_form(input.into(), &["input"], move |_| {
            let value = source.value_as_number();
            if !value.is_finite() {
                return;
            }
            let value = range.snap(value as f32);
            *parameter.value_mut(&mut controls.borrow_mut()) = value;
            log::trace!("{} = {value}", parameter.label());
        })
    }

    fn add_color(
        document: &Document,
        root: &Element,
        slot: ColorSlot,
        controls: Rc<RefCell<Controls>>,
    ) -> Result<EventCallback<web_sys::Event>, Error> {
        let input = create_input(document, "color")?;
        input.set_value(&format_hex(controls.borrow().color(slot)));
        append_row(document, root, color_label(slot), &input)?;

        let source = input.clone();
        EventCallback::new_form(input.into(), &["input"], move |_| {
            match parse_hex(&source.value()) {
                Some(color) => controls.borrow_mut().set_color(slot, color),
                None => log::warn!("ignoring colour {:?}", source.value()),
            }
        })
    }
}

fn create_input(document: &Document, kind: &str) -> Result<HtmlInputElement, Error> {
    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(JsValue::from)?;
    input.set_type(kind);
    Ok(input)
}

fn append_row(
    document: &Document,
    root: &Element,
    text: &str,
    input: &HtmlInputElement,
) -> Result<(), Error> {
    let row = document.create_element("label")?;
    row.set_attribute("style", ROW_STYLE)?;
    row.set_text_content(Some(text));
    row.append_child(input)?;
    root.append_child(&row)?;
    Ok(())
}
