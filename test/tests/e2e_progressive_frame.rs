/// E2E TESTS: a Client driving a RenderHost over in-memory pipes
///
/// Verifies that a frame arrives tile by tile, that previews refine in
/// order, and that every delivered pixel matches what the renderer drew.

use vision_client::{ClientConfig, ClientEvent, RequestPolicy};
use vision_server::{HostStatus, ServerConfig};
use vision_test::{compose_frame, pattern_pixel, Loopback, PatternRenderer};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn loopback(policy: RequestPolicy, division_level: usize) -> Loopback<PatternRenderer> {
    let config = ClientConfig {
        division_level,
        request_policy: policy,
        ..ClientConfig::default()
    };
    Loopback::new(config, ServerConfig::default(), PatternRenderer::default())
}

fn preview_levels(events: &[ClientEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|event| match event {
            ClientEvent::PreviewChanged { level } => Some(*level),
            _ => None,
        })
        .collect()
}

#[test]
fn frame_completes_for_every_policy_and_level() {
    init_logger();

    for policy in [RequestPolicy::OneAtATime, RequestPolicy::AllUpFront] {
        for level in 0..=4 {
            let mut loopback = loopback(policy, level);
            loopback.client.resize(37, 23).unwrap();

            let events = loopback.run_until_complete(1000).unwrap();
            let tiles = 1usize << (2 * level);

            assert_eq!(
                events.last(),
                Some(&ClientEvent::FrameComplete),
                "policy {:?} level {}",
                policy,
                level
            );
            assert_eq!(
                events
                    .iter()
                    .filter(|e| matches!(e, ClientEvent::TileAccepted { .. }))
                    .count(),
                tiles
            );
            assert_eq!(preview_levels(&events), (0..=level).collect::<Vec<_>>());
            assert_eq!(loopback.host.renderer().renders.len(), tiles);
        }
    }
}

#[test]
fn delivered_pixels_match_renderer() {
    init_logger();

    let mut loopback = loopback(RequestPolicy::AllUpFront, 2);
    loopback.client.resize(16, 8).unwrap();
    loopback.run_until_complete(10).unwrap();

    let frame = loopback.client.frame().expect("frame exists after resize");
    assert!(frame.is_complete());

    let width = 16;
    for (index, pixel) in compose_frame(frame).into_iter().enumerate() {
        if let Some(rgb) = pixel {
            assert_eq!(rgb, pattern_pixel(index % width, index / width));
        }
    }
}

#[test]
fn host_sees_frame_size_from_resize() {
    init_logger();

    let mut loopback = loopback(RequestPolicy::OneAtATime, 1);
    loopback.client.resize(5, 7).unwrap();
    loopback.run_until_complete(100).unwrap();

    let renderer = loopback.host.renderer();
    assert_eq!(renderer.resizes.len(), 1);
    assert_eq!(renderer.resizes[0].padded_width, 6);
    assert_eq!(renderer.resizes[0].padded_height, 8);
    for request in &renderer.renders {
        assert_eq!((request.frame_size.x, request.frame_size.y), (5, 7));
    }
}

#[test]
fn byte_at_a_time_delivery() {
    init_logger();

    let mut loopback = loopback(RequestPolicy::OneAtATime, 2).with_chunk_size(1);
    loopback.client.resize(9, 9).unwrap();

    let events = loopback.run_until_complete(100).unwrap();
    assert_eq!(events.last(), Some(&ClientEvent::FrameComplete));
}

#[test]
fn resize_mid_frame_discards_stale_tiles() {
    init_logger();

    let mut loopback = loopback(RequestPolicy::AllUpFront, 1);
    loopback.client.resize(8, 8).unwrap();
    loopback.client.resize(12, 12).unwrap();

    let events = loopback.run_until_complete(10).unwrap();

    let rejected = events
        .iter()
        .filter(|e| matches!(e, ClientEvent::ReplyRejected(_)))
        .count();
    assert_eq!(rejected, 4);
    assert_eq!(events.last(), Some(&ClientEvent::FrameComplete));
    assert_eq!(
        loopback.client.frame().map(|f| f.schedule().frame_width()),
        Some(12)
    );
}

#[test]
fn input_and_quit_reach_renderer() {
    init_logger();

    let mut loopback = loopback(RequestPolicy::OneAtATime, 0);
    loopback.client.send_key("space", true).unwrap();
    loopback.client.send_mouse_button("left", 4, 5, true).unwrap();
    loopback.client.send_mouse_move(-1, 2).unwrap();
    loopback.client.quit().unwrap();
    loopback.pump().unwrap();

    assert_eq!(loopback.host_status(), HostStatus::Quit);
    let renderer = loopback.host.renderer();
    assert_eq!(renderer.keys, vec![("space".to_string(), true)]);
    assert_eq!(
        renderer.mouse_buttons,
        vec![("left".to_string(), 4, 5, true)]
    );
    assert_eq!(renderer.mouse_moves, vec![(-1, 2)]);
}
