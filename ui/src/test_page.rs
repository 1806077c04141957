//! Drives a `VirtualDom` the way a renderer would: mount, click, re-render.
use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Mutation, Mutations, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

pub struct TestPage {
    dom: VirtualDom,
    click_targets: Vec<ElementId>,
}

impl TestPage {
    pub fn mount(mut dom: VirtualDom) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        let click_targets = mutations
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(id),
                _ => None,
            })
            .collect();

        Self { dom, click_targets }
    }

    /// Clicks the one element listening for clicks when the page was mounted,
    /// then applies whatever the click changed.
    pub fn click(&mut self) {
        let [target] = self.click_targets[..] else {
            panic!("expected one click target, found {}", self.click_targets.len());
        };

        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        self.dom.runtime().handle_event("click", event, target);
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
