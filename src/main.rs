//! Bubble Field entry point
//!
//! Wires the page to the state machines: canvas painting for the bubble
//! simulation, class/style sync for the carousel and nav. Native builds
//! run a short headless demo of the simulator instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, CanvasRenderingContext2d, CssStyleDeclaration, Document, Element,
        HtmlButtonElement, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, SvgElement,
        TouchEvent, Window,
    };

    use bubble_field::carousel::Carousel;
    use bubble_field::courses::{self, LessonStatus};
    use bubble_field::nav::{ElementRect, NavBar, gooey_rect};
    use bubble_field::render::Painter;
    use bubble_field::settings::Settings;
    use bubble_field::sim::{BubbleField, Viewport, tick};

    /// Everything the frame loop drives. Each view is optional so a page
    /// without one of the sections still runs the others.
    struct App {
        field: Option<FieldView>,
        carousel: Option<CarouselView>,
        nav: Option<NavView>,
        last_time: f64,
    }

    /// The simulation plus the canvas it paints to
    struct FieldView {
        field: BubbleField,
        painter: Painter,
        canvas: HtmlCanvasElement,
    }

    impl FieldView {
        fn resize(&mut self, window: &Window, document: &Document) {
            let width = inner_dimension(window.inner_width());
            let height = inner_dimension(window.inner_height());
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            self.field
                .resize(Viewport::new(width, height), header_height(document));
        }
    }

    /// Carousel state plus the nodes it keeps in sync
    struct CarouselView {
        carousel: Carousel,
        container: Element,
        cards: Vec<Element>,
        dots: Vec<Element>,
        prev_btn: Option<HtmlButtonElement>,
        next_btn: Option<HtmlButtonElement>,
        modal: Option<Element>,
        modal_body: Option<Element>,
        /// Lock state at the last sync, so lock edges re-enable buttons
        was_locked: bool,
    }

    const SLOT_CLASSES: [&str; 5] = ["active", "prev-1", "prev-2", "next-1", "next-2"];

    impl CarouselView {
        /// Write the current ring state into card classes, dots and
        /// button disabled flags
        fn sync(&mut self) {
            for (i, card) in self.cards.iter().enumerate() {
                let list = card.class_list();
                for class in SLOT_CLASSES {
                    let _ = list.remove_1(class);
                }
                if let Some(class) = self.carousel.slot_for(i).class() {
                    let _ = list.add_1(class);
                }
            }
            for (i, dot) in self.dots.iter().enumerate() {
                let _ = dot
                    .class_list()
                    .toggle_with_force("active", i == self.carousel.current);
            }

            let locked = self.carousel.locked();
            if let Some(btn) = &self.prev_btn {
                btn.set_disabled(locked);
            }
            if let Some(btn) = &self.next_btn {
                btn.set_disabled(locked);
            }
            self.was_locked = locked;
        }

        /// Advance countdowns; re-sync on index changes and lock edges
        fn step(&mut self, dt: f32) {
            let changed = self.carousel.tick(dt);
            if changed || self.carousel.locked() != self.was_locked {
                self.sync();
            }
        }

        fn open_modal(&mut self, course_id: u32, document: &Document) {
            let course = self.carousel.open_lessons(course_id);
            if let Some(body) = &self.modal_body {
                body.set_inner_html(&courses::lessons_html(course));
            }
            if let Some(modal) = &self.modal {
                let _ = modal.class_list().add_1("active");
            }
            set_body_overflow(document, "hidden");
            log::info!("lessons modal open for {}", course.title);
        }

        fn close_modal(&mut self, document: &Document) {
            self.carousel.close_lessons();
            if let Some(modal) = &self.modal {
                let _ = modal.class_list().remove_1("active");
            }
            set_body_overflow(document, "");
        }

        /// Fill each card's progress ring from its data-progress attribute
        fn init_progress_rings(&self) {
            for card in &self.cards {
                let percent = card
                    .query_selector(".progress-circle")
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("data-progress"))
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(0.0);
                let Ok(Some(fill)) = card.query_selector(".progress-ring-fill") else {
                    continue;
                };
                let Some(style) = element_style(&fill) else {
                    continue;
                };
                let ring = courses::progress_ring(percent);
                let _ = style.set_property("stroke-dasharray", &ring.dasharray);
                let _ = style.set_property("stroke-dashoffset", &ring.dashoffset.to_string());
            }
        }
    }

    /// Nav state plus the particle nodes keyed by particle id
    struct NavView {
        bar: NavBar,
        items: Vec<Element>,
        effect: Option<Element>,
        nodes: HashMap<u32, Element>,
    }

    impl NavView {
        fn activate(&mut self, index: usize, document: &Document) {
            let previous = self.bar.active;
            let Some(burst) = self.bar.activate(index) else {
                return;
            };
            let burst = burst.to_vec();

            if let Some(old) = self.items.get(previous) {
                let _ = old.class_list().remove_1("active");
            }
            if let Some(item) = self.items.get(index) {
                let _ = item.class_list().add_1("active");
            }
            self.place_gooey(index);

            let Some(effect) = &self.effect else {
                return;
            };
            for p in &burst {
                let Ok(particle) = document.create_element("span") else {
                    continue;
                };
                let Ok(point) = document.create_element("span") else {
                    continue;
                };
                particle.set_class_name("particle");
                point.set_class_name("point");
                if let Some(style) = element_style(&particle) {
                    let _ = style.set_property("--start-x", &format!("{}px", p.start.x));
                    let _ = style.set_property("--start-y", &format!("{}px", p.start.y));
                    let _ = style.set_property("--end-x", &format!("{}px", p.end.x));
                    let _ = style.set_property("--end-y", &format!("{}px", p.end.y));
                    let _ = style.set_property("--color", p.color);
                    let _ = style.set_property("--time", &format!("{}ms", p.duration_ms));
                }
                let _ = particle.append_child(&point);
                let _ = effect.append_child(&particle);
                self.nodes.insert(p.id, particle);
            }
        }

        /// Size and place the gooey highlight under item `index`
        fn place_gooey(&self, index: usize) {
            let Some(effect) = &self.effect else {
                return;
            };
            let Some(item) = self.items.get(index) else {
                return;
            };
            let Some(parent) = item.parent_element() else {
                return;
            };
            let rect = gooey_rect(rect_of(item), rect_of(&parent));
            let Some(style) = element_style(effect) else {
                return;
            };
            let _ = style.set_property("width", &format!("{}px", rect.width));
            let _ = style.set_property("height", &format!("{}px", rect.height));
            let _ = style.set_property("left", &format!("{}px", rect.left));
            let _ = style.set_property("top", &format!("{}px", rect.top));
        }

        /// Age particles and drop the nodes of the expired
        fn step(&mut self, dt_ms: f32) {
            for id in self.bar.tick(dt_ms) {
                if let Some(node) = self.nodes.remove(&id) {
                    node.remove();
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let field = setup_field(&window, &document);
        if field.is_none() {
            log::warn!("bubble canvas missing or unusable, background disabled");
        }
        let carousel = setup_carousel(&document);
        let nav = setup_nav(&document);

        let app = Rc::new(RefCell::new(App {
            field,
            carousel,
            nav,
            last_time: 0.0,
        }));

        setup_pointer_handlers(&window, app.clone());
        setup_resize_handler(&window, app.clone());
        if app.borrow().carousel.is_some() {
            setup_carousel_handlers(app.clone());
            setup_drag_handlers(&document, app.clone());
            setup_modal_handlers(&document, app.clone());
        }
        if app.borrow().nav.is_some() {
            setup_nav_handlers(app.clone());
        }

        request_animation_frame(app);
        log::info!("bubble field running");
    }

    fn setup_field(window: &Window, document: &Document) -> Option<FieldView> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("bubbleCanvas")?
            .dyn_into()
            .ok()?;
        let settings = Settings::from_attr(canvas.get_attribute("data-settings").as_deref());

        let width = inner_dimension(window.inner_width());
        let height = inner_dimension(window.inner_height());
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut field = BubbleField::new(
            Viewport::new(width, height),
            header_height(document),
            settings.effective_bubble_count(),
            seed,
        );
        field.repulsion_strength = settings.effective_repulsion_strength();
        field.parallax_gain = settings.effective_parallax_gain();

        let painter = Painter::new(
            ctx,
            settings.effective_trail_alpha(),
            settings.specular_enabled(),
        );
        log::info!("field: {} bubbles, seed {seed}", field.bubbles.len());

        Some(FieldView {
            field,
            painter,
            canvas,
        })
    }

    fn setup_carousel(document: &Document) -> Option<CarouselView> {
        let container = document.query_selector(".cards-container").ok().flatten()?;
        let cards = collect(document, ".course-card");
        let dots = collect(document, ".dot");

        let mut view = CarouselView {
            carousel: Carousel::new(cards.len()),
            container,
            cards,
            dots,
            prev_btn: query_button(document, ".prev-btn"),
            next_btn: query_button(document, ".next-btn"),
            modal: document.get_element_by_id("lessonsModal"),
            modal_body: document.query_selector(".modal-body").ok().flatten(),
            was_locked: false,
        };
        view.init_progress_rings();
        view.sync();
        log::info!("carousel: {} cards", view.cards.len());
        Some(view)
    }

    fn setup_nav(document: &Document) -> Option<NavView> {
        let items = collect(document, "nav ul li");
        if items.is_empty() {
            return None;
        }
        let view = NavView {
            bar: NavBar::new(js_sys::Date::now() as u64),
            items,
            effect: document.get_element_by_id("gooeyEffect"),
            nodes: HashMap::new(),
        };
        view.place_gooey(0);
        Some(view)
    }

    fn setup_pointer_handlers(window: &Window, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(view) = app.borrow_mut().field.as_mut() {
                    view.field.set_pointer(Vec2::new(
                        event.client_x() as f32,
                        event.client_y() as f32,
                    ));
                }
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(view) = app.borrow_mut().field.as_mut() {
                    view.field.clear_pointer();
                }
            });
            let _ = window
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    if let Some(view) = app.borrow_mut().field.as_mut() {
                        view.field.set_pointer(Vec2::new(
                            touch.client_x() as f32,
                            touch.client_y() as f32,
                        ));
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // touchmove must be non-passive to suppress page scroll while
        // steering bubbles
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    if let Some(view) = app.borrow_mut().field.as_mut() {
                        view.field.set_pointer(Vec2::new(
                            touch.client_x() as f32,
                            touch.client_y() as f32,
                        ));
                    }
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                if let Some(view) = app.borrow_mut().field.as_mut() {
                    view.field.clear_pointer();
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(window: &Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            if let Some(view) = app.borrow_mut().field.as_mut() {
                view.resize(&window, &document);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_carousel_handlers(app: Rc<RefCell<App>>) {
        let (prev_btn, next_btn, dots, cards) = {
            let a = app.borrow();
            let Some(view) = a.carousel.as_ref() else {
                return;
            };
            (
                view.prev_btn.clone(),
                view.next_btn.clone(),
                view.dots.clone(),
                view.cards.clone(),
            )
        };

        if let Some(btn) = prev_btn {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(view) = app.borrow_mut().carousel.as_mut() {
                    if view.carousel.prev() {
                        view.sync();
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = next_btn {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(view) = app.borrow_mut().carousel.as_mut() {
                    if view.carousel.next() {
                        view.sync();
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for (i, dot) in dots.iter().enumerate() {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(view) = app.borrow_mut().carousel.as_mut() {
                    if view.carousel.go_to(i) {
                        view.sync();
                    }
                }
            });
            let _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for (i, card) in cards.iter().enumerate() {
            let course_id = card
                .get_attribute("data-course-id")
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(0);

            if let Ok(Some(btn)) = card.query_selector(".view-details-btn") {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    event.stop_propagation();
                    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                        return;
                    };
                    if let Some(view) = app.borrow_mut().carousel.as_mut() {
                        view.open_modal(course_id, &document);
                    }
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            if let Ok(Some(btn)) = card.query_selector(".enter-course-btn") {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    event.stop_propagation();
                    log::info!("entering course {course_id}");
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            // Clicking the card body (not its buttons) navigates to it
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let on_button = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("button").ok().flatten())
                    .is_some();
                if on_button {
                    return;
                }
                if let Some(view) = app.borrow_mut().carousel.as_mut() {
                    if view.carousel.go_to(i) {
                        view.sync();
                    }
                }
            });
            let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_drag_handlers(document: &Document, app: Rc<RefCell<App>>) {
        let container = {
            let a = app.borrow();
            let Some(view) = a.carousel.as_ref() else {
                return;
            };
            view.container.clone()
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(view) = app.borrow_mut().carousel.as_mut() {
                    view.carousel.press(event.client_x() as f32);
                }
            });
            let _ = container
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    if let Some(view) = app.borrow_mut().carousel.as_mut() {
                        view.carousel.press(touch.client_x() as f32);
                    }
                }
            });
            let _ = container
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(view) = app.borrow_mut().carousel.as_mut() {
                    if view.carousel.drag_to(event.client_x() as f32) {
                        view.sync();
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    if let Some(view) = app.borrow_mut().carousel.as_mut() {
                        if view.carousel.drag_to(touch.client_x() as f32) {
                            view.sync();
                        }
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for kind in ["mouseup", "touchend"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(view) = app.borrow_mut().carousel.as_mut() {
                    view.carousel.release();
                }
            });
            let _ =
                document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_modal_handlers(document: &Document, app: Rc<RefCell<App>>) {
        let (modal, modal_body) = {
            let a = app.borrow();
            let Some(view) = a.carousel.as_ref() else {
                return;
            };
            (view.modal.clone(), view.modal_body.clone())
        };

        if let Some(modal) = &modal {
            if let Ok(list) = modal.query_selector_all(".modal-close, #closeModalBtn") {
                for i in 0..list.length() {
                    let Some(btn) = list.item(i) else {
                        continue;
                    };
                    let app = app.clone();
                    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                        close_modal(&app);
                    });
                    let _ = btn
                        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                    closure.forget();
                }
            }

            if let Ok(Some(overlay)) = modal.query_selector(".modal-overlay") {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    close_modal(&app);
                });
                let _ = overlay
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }

            if let Ok(Some(btn)) = modal.query_selector("#startLessonBtn") {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                        return;
                    };
                    let mut a = app.borrow_mut();
                    let Some(view) = a.carousel.as_mut() else {
                        return;
                    };
                    if let Some(course) = view.carousel.open_course {
                        let lesson = course
                            .lessons
                            .iter()
                            .find(|l| l.status == LessonStatus::Current)
                            .unwrap_or(&course.lessons[0]);
                        log::info!("starting lesson {} of {}", lesson.id, course.title);
                        view.close_modal(&document);
                    }
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // One delegated listener outlives every rebuild of the lesson list
        if let Some(body) = &modal_body {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                let Ok(Some(card)) = target.closest(".lesson-card") else {
                    return;
                };
                let Some(lesson_id) = card
                    .get_attribute("data-lesson-id")
                    .and_then(|s| s.parse::<u32>().ok())
                else {
                    return;
                };
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let mut a = app.borrow_mut();
                let Some(view) = a.carousel.as_mut() else {
                    return;
                };
                if let Some(course) = view.carousel.open_course {
                    log::info!("starting lesson {lesson_id} of {}", course.title);
                }
                view.close_modal(&document);
            });
            let _ =
                body.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    close_modal(&app);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_nav_handlers(app: Rc<RefCell<App>>) {
        let items = {
            let a = app.borrow();
            let Some(view) = a.nav.as_ref() else {
                return;
            };
            view.items.clone()
        };

        for (i, item) in items.iter().enumerate() {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                if let Some(view) = app.borrow_mut().nav.as_mut() {
                    view.activate(i, &document);
                }
            });
            let _ = item.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            a.last_time = time;

            if let Some(view) = a.field.as_mut() {
                tick(&mut view.field, dt);
                view.painter.paint(&view.field);
            }
            if let Some(view) = a.carousel.as_mut() {
                view.step(dt);
            }
            if let Some(view) = a.nav.as_mut() {
                view.step(dt * 1000.0);
            }
        }

        request_animation_frame(app);
    }

    fn close_modal(app: &Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(view) = app.borrow_mut().carousel.as_mut() {
            view.close_modal(&document);
        }
    }

    fn set_body_overflow(document: &Document, value: &str) {
        if let Some(body) = document.body() {
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn header_height(document: &Document) -> f32 {
        document
            .query_selector(".hero")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_height() as f32)
            .unwrap_or(0.0)
    }

    fn inner_dimension(value: Result<JsValue, JsValue>) -> f32 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    }

    fn collect(document: &Document, selector: &str) -> Vec<Element> {
        let mut out = Vec::new();
        if let Ok(list) = document.query_selector_all(selector) {
            for i in 0..list.length() {
                if let Some(node) = list.item(i) {
                    if let Ok(el) = node.dyn_into::<Element>() {
                        out.push(el);
                    }
                }
            }
        }
        out
    }

    fn query_button(document: &Document, selector: &str) -> Option<HtmlButtonElement> {
        document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into()
            .ok()
    }

    fn rect_of(el: &Element) -> ElementRect {
        let r = el.get_bounding_client_rect();
        ElementRect {
            left: r.left() as f32,
            top: r.top() as f32,
            width: r.width() as f32,
            height: r.height() as f32,
        }
    }

    /// Inline style access that works for both HTML and SVG nodes
    fn element_style(el: &Element) -> Option<CssStyleDeclaration> {
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            return Some(html.style());
        }
        el.dyn_ref::<SvgElement>().map(|svg| svg.style())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bubble_field::consts::*;
    use bubble_field::sim::{BubbleField, Viewport, tick};

    env_logger::init();
    log::info!("bubble field (native) headless demo");

    let mut field = BubbleField::new(
        Viewport::new(1024.0, 768.0),
        120.0,
        DEFAULT_BUBBLE_COUNT,
        42,
    );
    for _ in 0..600 {
        tick(&mut field, 1.0 / 60.0);
    }

    let max_speed = field
        .bubbles
        .iter()
        .map(|b| b.vel.length())
        .fold(0.0_f32, f32::max);
    log::info!(
        "{} bubbles settled after 600 ticks, max speed {max_speed:.3} px/tick",
        field.bubbles.len()
    );
    log::info!("run the web build for the interactive version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
