use crate::config::load_config;
use crate::essay::{build_evaluator, EssayForm};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    // Shell children must be Send; the evaluator is an Rc
    let evaluator = StoredValue::new_local(build_evaluator(&config.evaluator));

    view! {
        <Shell>
            <EssayForm evaluator=evaluator.get_value() />
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use crate::essay::Evaluator;
    use leptos::prelude::*;
    use std::rc::Rc;

    fn assert_send<T: Send>() {}

    #[test]
    fn test_evaluator_handle_can_enter_children() {
        assert_send::<StoredValue<Rc<dyn Evaluator>, LocalStorage>>();
    }
}
