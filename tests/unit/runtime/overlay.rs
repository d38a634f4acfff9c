use super::*;

#[test]
fn readers_see_writer_updates() {
    let (writer, reader) = overlay_state();
    let other = writer.reader();
    assert_eq!(reader.get(), OverlayFlags::default());

    assert!(writer.toggle_view_modal());
    assert!(reader.is_open());
    assert!(other.get().should_render_modal);

    assert!(!writer.toggle_view_modal());
    assert!(!other.is_open());
    assert!(reader.get().should_render_modal);

    writer.finish_close();
    assert_eq!(reader.get(), OverlayFlags::default());
}

#[test]
fn finish_close_is_ignored_while_open() {
    let (writer, reader) = overlay_state();
    writer.set_view_modal(true);
    writer.finish_close();
    assert!(reader.get().should_render_modal);
}

#[test]
fn closer_closes_and_unmounts_but_never_opens() {
    let (writer, reader) = overlay_state();
    let closer = writer.closer();

    closer.finish_close();
    assert_eq!(reader.get(), OverlayFlags::default());

    writer.set_view_modal(true);
    closer.finish_close();
    assert!(reader.get().should_render_modal);

    closer.close();
    assert_eq!(
        closer.get(),
        OverlayFlags {
            view_modal: false,
            should_render_modal: true,
        }
    );
    closer.finish_close();
    assert_eq!(reader.get(), OverlayFlags::default());
}
