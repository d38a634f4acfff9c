use super::*;

fn counter() -> (Rc<Cell<u32>>, FrameCallback) {
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    (hits, Box::new(move |_ts| h.set(h.get() + 1)))
}

#[test]
fn subscribe_advance_unsubscribe() {
    let driver = ManualFrameDriver::new();
    let (hits, cb) = counter();
    let id = driver.subscribe(cb);
    driver.run(0.0, 16.0, 3);
    assert_eq!(hits.get(), 3);
    assert!(driver.unsubscribe(id));
    assert!(!driver.unsubscribe(id));
    driver.advance(100.0);
    assert_eq!(hits.get(), 3);
}

#[test]
fn timestamps_are_forwarded() {
    let driver = ManualFrameDriver::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    driver.subscribe(Box::new(move |ts| s.borrow_mut().push(ts)));
    driver.run(10.0, 5.0, 3);
    assert_eq!(*seen.borrow(), vec![10.0, 15.0, 20.0]);
}

#[test]
fn handle_never_double_registers() {
    let driver: Rc<ManualFrameDriver> = Rc::new(ManualFrameDriver::new());
    let mut handle = AnimationHandle::new(driver.clone());
    let (first, cb1) = counter();
    let (second, cb2) = counter();
    handle.attach(cb1);
    handle.attach(cb2);
    assert_eq!(driver.live_subscriptions(), 1);
    driver.advance(0.0);
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);

    handle.detach();
    handle.detach();
    assert!(!handle.is_attached());
    assert_eq!(driver.live_subscriptions(), 0);
}

#[test]
fn dropping_handle_unsubscribes() {
    let driver: Rc<ManualFrameDriver> = Rc::new(ManualFrameDriver::new());
    {
        let mut handle = AnimationHandle::new(driver.clone());
        let (_hits, cb) = counter();
        handle.attach(cb);
        assert_eq!(driver.live_subscriptions(), 1);
    }
    assert_eq!(driver.live_subscriptions(), 0);
}

#[test]
fn callback_can_unsubscribe_itself_mid_frame() {
    let driver: Rc<ManualFrameDriver> = Rc::new(ManualFrameDriver::new());
    let id_cell: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
    let hits = Rc::new(Cell::new(0));

    let (d, idc, h) = (Rc::clone(&driver), Rc::clone(&id_cell), Rc::clone(&hits));
    let id = driver.subscribe(Box::new(move |_| {
        h.set(h.get() + 1);
        if let Some(id) = idc.get() {
            d.unsubscribe(id);
        }
    }));
    id_cell.set(Some(id));

    driver.advance(0.0);
    driver.advance(16.0);
    assert_eq!(hits.get(), 1);
    assert_eq!(driver.live_subscriptions(), 0);
}
