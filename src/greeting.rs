use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::domain::Greeting;

//the one piece of shared mutable state in the app.
//ArcSwap = atomically replaceable Arc, so readers never take a lock and never see a half-written value
pub struct GreetingState {
    current: ArcSwap<String>,
}

impl GreetingState {
    //taking Greeting (not String) means an empty value can't get in here - the parse already happened
    pub fn new(initial: Greeting) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial.into_inner()),
        }
    }

    //atomic load - cheap enough to call on every request
    pub fn get(&self) -> Arc<String> {
        self.current.load_full()
    }

    //atomic replace - visible to every subsequent get() on any thread
    pub fn set(&self, greeting: Greeting) {
        self.current.store(Arc::new(greeting.into_inner()));
    }
}

//pure formatting, shared by the configurable endpoints
pub fn render(greeting: &str, who: &str) -> String {
    format!("{} {}!", greeting, who)
}
