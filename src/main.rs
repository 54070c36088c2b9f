use crossbeam_utils::thread;
use seq_list::{setup_logger, ListError, SequentialList};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

const NUM_THREADS: i32 = 4;
const ELEMS_PER_THREAD: i32 = 1_000;

fn scenario() -> Result<(), ListError> {
    let mut list = SequentialList::new();
    for elem in 1..=3 {
        list.push_back(elem);
    }
    info!("pushed back: {}", list);

    list.reverse()?;
    info!("reversed: {}", list);

    let popped = list.pop_front()?;
    info!("pop_front returned {}, list is {}", popped, list);

    list.insert_at(1, 9)?;
    info!("insert_at(1, 9): {}", list);

    let removed = list.remove_if(|v| *v == 9);
    info!("remove_if(== 9) returned {:?}, list is {}", removed, list);

    info!("front (tail) = {}, back (head) = {}", list.front()?, list.back()?);
    Ok(())
}

fn main() {
    setup_logger();

    if let Err(e) = scenario() {
        error!("scenario failed: {}", e);
    }

    let list = Mutex::new(SequentialList::new());

    thread::scope(|s| {
        let shared_list = Arc::new(&list);
        for i in 0..NUM_THREADS {
            let cloned_shared_list = Arc::clone(&shared_list);
            s.spawn(move |_| {
                for elem in (i * ELEMS_PER_THREAD)..((i + 1) * ELEMS_PER_THREAD) {
                    match cloned_shared_list.lock() {
                        Ok(mut guard) => guard.push_back(elem),
                        Err(e) => {
                            error!("thread {} found the list lock poisoned: {}", i, e);
                            return;
                        }
                    }
                }
            });
        }
    })
    .unwrap_or_else(|_| error!("a pushing thread panicked"));

    match list.into_inner() {
        Ok(list) => info!("{} threads pushed {} elements", NUM_THREADS, list.len()),
        Err(e) => error!("list lock poisoned: {}", e),
    }
}
