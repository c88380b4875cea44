//! Instance management for tooltip widgets
//! Controllers live in thread-local storage keyed by instance id; DOM
//! callbacks only carry the id and reach their controller through `dispatch`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use uuid::Uuid;

use hovertips_integration::TooltipController;
use hovertips_shared::TooltipEvent;

use crate::web_host::WebHost;

pub type WebController = TooltipController<WebHost>;

thread_local! {
    static TOOLTIP_INSTANCES: RefCell<HashMap<Uuid, WebController>> = RefCell::new(HashMap::new());
    static EVENT_QUEUE: RefCell<VecDeque<(Uuid, TooltipEvent)>> = RefCell::new(VecDeque::new());
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Manages tooltip controllers without global mutable state
pub struct InstanceManager;

impl InstanceManager {
    /// Store a controller under an id chosen before it was built
    pub fn insert_instance(id: Uuid, controller: WebController) {
        TOOLTIP_INSTANCES.with(|instances| {
            instances.borrow_mut().insert(id, controller);
        });
    }

    pub fn with_instance<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&WebController) -> R,
    {
        TOOLTIP_INSTANCES.with(|instances| instances.borrow().get(id).map(f))
    }

    pub fn with_instance_mut<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut WebController) -> R,
    {
        TOOLTIP_INSTANCES.with(|instances| instances.borrow_mut().get_mut(id).map(f))
    }

    pub fn instance_exists(id: &Uuid) -> bool {
        TOOLTIP_INSTANCES.with(|instances| instances.borrow().contains_key(id))
    }

    pub fn instance_count() -> usize {
        TOOLTIP_INSTANCES.with(|instances| instances.borrow().len())
    }

    /// Queue `event` for instance `id` and drain the queue unless a dispatch
    /// is already running further up the stack
    pub fn dispatch(id: Uuid, event: TooltipEvent) {
        EVENT_QUEUE.with(|queue| queue.borrow_mut().push_back((id, event)));
        if DISPATCHING.with(|flag| flag.replace(true)) {
            return;
        }

        while let Some((id, event)) = EVENT_QUEUE.with(|queue| queue.borrow_mut().pop_front()) {
            let handled = Self::with_instance_mut(&id, |controller| controller.handle_event(event));
            if handled.is_none() {
                log::trace!("dropping {:?} for unknown instance {}", event, id);
            }
        }

        DISPATCHING.with(|flag| flag.set(false));
    }

    /// Events waiting to be handled
    pub fn pending_events() -> usize {
        EVENT_QUEUE.with(|queue| queue.borrow().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hovertips_shared::TargetId;

    #[test]
    fn test_dispatch_to_unknown_instance_drains_queue() {
        let id = Uuid::new_v4();
        assert!(!InstanceManager::instance_exists(&id));

        InstanceManager::dispatch(id, TooltipEvent::PointerEnter(TargetId(0)));
        InstanceManager::dispatch(id, TooltipEvent::PointerLeave(TargetId(0)));

        assert_eq!(InstanceManager::pending_events(), 0);
        assert_eq!(InstanceManager::instance_count(), 0);
    }
}
