//! Frame-diff engine: positional, bit-exact comparison of two snapshots.

use crate::frame::FrameSnapshot;

/// Report whether `fresh` differs from `previous`.
///
/// The comparison is positional: draw lists pair up by index, and within
/// each pair the command records, the index buffer, and the vertex buffer
/// must match in both length and content. Any mismatch anywhere reports
/// changed. Content equality is bit-exact (see [`crate::frame`]), so this
/// is a structured `memcmp` against the previous frame — not a semantic
/// diff. A toolkit reaching the same pixels through reordered commands is
/// treated as changed, which errs on the side of repainting.
pub fn frame_changed(previous: &FrameSnapshot, fresh: &FrameSnapshot) -> bool {
    if previous.list_count() != fresh.list_count() {
        return true;
    }

    for (prev, new) in previous.lists().iter().zip(fresh.lists()) {
        if prev.commands() != new.commands() {
            return true;
        }
        if prev.indices() != new.indices() {
            return true;
        }
        if prev.vertices() != new.vertices() {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{DrawCommand, Vertex};

    fn demo_frame() -> FrameSnapshot {
        let mut frame = FrameSnapshot::new();
        let list = frame.push_list();
        list.push_command(DrawCommand::Elements {
            count: 6,
            clip_rect: [0.0, 0.0, 640.0, 480.0],
            texture: 1,
            vtx_offset: 0,
            idx_offset: 0,
        });
        list.extend_indices(&[0, 1, 2, 2, 3, 0]);
        list.extend_vertices([
            Vertex {
                pos: [0.0, 0.0],
                uv: [0.0, 0.0],
                color: [255, 0, 0, 255],
            },
            Vertex {
                pos: [10.0, 0.0],
                uv: [1.0, 0.0],
                color: [255, 0, 0, 255],
            },
            Vertex {
                pos: [10.0, 10.0],
                uv: [1.0, 1.0],
                color: [255, 0, 0, 255],
            },
            Vertex {
                pos: [0.0, 10.0],
                uv: [0.0, 1.0],
                color: [255, 0, 0, 255],
            },
        ]);
        frame
    }

    #[test]
    fn test_identical_frames_unchanged() {
        assert!(!frame_changed(&demo_frame(), &demo_frame()));
    }

    #[test]
    fn test_list_count_mismatch_changed() {
        let mut extra = demo_frame();
        extra.push_list();
        assert!(frame_changed(&demo_frame(), &extra));
        assert!(frame_changed(&extra, &demo_frame()));
    }

    #[test]
    fn test_command_content_mismatch_changed() {
        let base = demo_frame();

        let mut frame = FrameSnapshot::new();
        let list = frame.push_list();
        list.push_command(DrawCommand::Elements {
            count: 6,
            clip_rect: [0.0, 0.0, 640.0, 481.0],
            texture: 1,
            vtx_offset: 0,
            idx_offset: 0,
        });
        list.extend_indices(base.lists()[0].indices());
        list.extend_vertices(base.lists()[0].vertices().iter().copied());

        assert!(frame_changed(&base, &frame));
    }

    #[test]
    fn test_single_index_mismatch_changed() {
        let base = demo_frame();

        let mut frame = FrameSnapshot::new();
        let list = frame.push_list();
        for cmd in base.lists()[0].commands() {
            list.push_command(*cmd);
        }
        list.extend_indices(&[0, 1, 2, 2, 3, 1]);
        list.extend_vertices(base.lists()[0].vertices().iter().copied());

        assert!(frame_changed(&base, &frame));
    }

    #[test]
    fn test_empty_frames_unchanged() {
        assert!(!frame_changed(&FrameSnapshot::new(), &FrameSnapshot::new()));
    }
}
