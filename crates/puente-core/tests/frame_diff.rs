//! Frame-diff and draw-cache behavior across whole frames.
//!
//! Exercises the change-detection contract the repaint scheduler relies
//! on: byte-identical frames must never trigger a repaint, and any
//! single-element difference in any buffer must.

use puente_core::{DrawCache, DrawCommand, DrawIndex, FrameSnapshot, Vertex, frame_changed};

fn vertex(x: f32, y: f32, shade: u8) -> Vertex {
    Vertex {
        pos: [x, y],
        uv: [x / 64.0, y / 64.0],
        color: [shade, shade, shade, 255],
    }
}

/// A two-list frame shaped like real toolkit output: a window background
/// list and a widget list with two commands sharing one vertex buffer.
fn build_frame(frame: &mut FrameSnapshot, shade: u8) {
    let background = frame.push_list();
    background.push_command(DrawCommand::Elements {
        count: 6,
        clip_rect: [0.0, 0.0, 640.0, 480.0],
        texture: 1,
        vtx_offset: 0,
        idx_offset: 0,
    });
    background.extend_indices(&[0, 1, 2, 2, 3, 0]);
    background.extend_vertices([
        vertex(0.0, 0.0, shade),
        vertex(640.0, 0.0, shade),
        vertex(640.0, 480.0, shade),
        vertex(0.0, 480.0, shade),
    ]);

    let widgets = frame.push_list();
    widgets.push_command(DrawCommand::Elements {
        count: 3,
        clip_rect: [8.0, 8.0, 120.0, 32.0],
        texture: 1,
        vtx_offset: 0,
        idx_offset: 0,
    });
    widgets.push_command(DrawCommand::Elements {
        count: 3,
        clip_rect: [8.0, 8.0, 120.0, 32.0],
        texture: 2,
        vtx_offset: 0,
        idx_offset: 3,
    });
    widgets.extend_indices(&[0, 1, 2, 3, 4, 5]);
    widgets.extend_vertices((0..6).map(|i| vertex(8.0 + i as f32, 8.0, 200)));
}

fn frame_with(shade: u8) -> FrameSnapshot {
    let mut frame = FrameSnapshot::new();
    build_frame(&mut frame, shade);
    frame
}

#[test]
fn identical_frames_report_unchanged() {
    assert!(!frame_changed(&frame_with(30), &frame_with(30)));
}

#[test]
fn single_vertex_shade_reports_changed() {
    assert!(frame_changed(&frame_with(30), &frame_with(31)));
}

#[test]
fn swapped_list_order_reports_changed() {
    let normal = frame_with(30);

    // Same two lists, submitted in the opposite order: positionally
    // different, so the diff must flag it even though the content set
    // is identical.
    let mut swapped = FrameSnapshot::new();
    {
        let mut staging = FrameSnapshot::new();
        build_frame(&mut staging, 30);
        for source in staging.lists().iter().rev() {
            let list = swapped.push_list();
            for cmd in source.commands() {
                list.push_command(*cmd);
            }
            list.extend_indices(source.indices());
            list.extend_vertices(source.vertices().iter().copied());
        }
    }

    assert!(frame_changed(&normal, &swapped));
}

#[test]
fn extra_trailing_index_reports_changed() {
    let normal = frame_with(30);
    // Rebuild the same frame with one extra index on the widget list.
    let mut rebuilt = FrameSnapshot::new();
    for (i, source) in normal.lists().iter().enumerate() {
        let list = rebuilt.push_list();
        for cmd in source.commands() {
            list.push_command(*cmd);
        }
        list.extend_indices(source.indices());
        if i == 1 {
            list.extend_indices(&[0 as DrawIndex]);
        }
        list.extend_vertices(source.vertices().iter().copied());
    }

    assert!(frame_changed(&normal, &rebuilt));
}

#[test]
fn callback_identity_participates_in_diff() {
    let mut with_callback = FrameSnapshot::new();
    with_callback.push_list().push_command(DrawCommand::Callback { id: 0x1000 });

    let mut same = FrameSnapshot::new();
    same.push_list().push_command(DrawCommand::Callback { id: 0x1000 });

    let mut different = FrameSnapshot::new();
    different.push_list().push_command(DrawCommand::Callback { id: 0x2000 });

    assert!(!frame_changed(&with_callback, &same));
    assert!(frame_changed(&with_callback, &different));
}

#[test]
fn cache_accepts_then_settles() {
    let mut cache = DrawCache::new();

    // First capture: empty cache vs a real frame.
    assert!(cache.submit_with(|frame| build_frame(frame, 30)));
    // Identical content: the scheduler must see "unchanged".
    assert!(!cache.submit_with(|frame| build_frame(frame, 30)));
    // Visual change: accepted, replacing the cache wholesale.
    assert!(cache.submit_with(|frame| build_frame(frame, 90)));
    // And settles again.
    assert!(!cache.submit_with(|frame| build_frame(frame, 90)));
}
