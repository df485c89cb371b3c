use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{tick_into, GameSession, RenderSnapshot};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::InputEvent;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

const SCRIPT: [Option<InputEvent>; 8] = [
    None,
    Some(InputEvent::MoveLeft),
    Some(InputEvent::Rotate),
    Some(InputEvent::MoveRight),
    Some(InputEvent::SoftDrop),
    Some(InputEvent::Hold),
    None,
    Some(InputEvent::HardDrop),
];

// Both gates share the counting allocator, so they run in one test.
#[test]
fn hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut session = GameSession::with_seed(1);
    let mut snap = RenderSnapshot::default();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up.
    tick_into(&mut session, None, &mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..2000 {
            tick_into(&mut session, SCRIPT[i % SCRIPT.len()], &mut snap);
            if snap.game_over {
                session.restart();
            }
        }
    });
    assert_eq!(allocs, 0, "tick allocated");

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            tick_into(&mut session, SCRIPT[i % SCRIPT.len()], &mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });
    assert_eq!(allocs, 0, "render allocated");
}
