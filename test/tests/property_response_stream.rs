/// PROPERTY-BASED TESTS: streaming response decoding
///
/// However the byte stream is split into writes, the parser reports the
/// same frames in the same order.

use proptest::prelude::*;
use vision_client::{ResponseEvent, ResponseEvents, ResponseParser, RgbBuffer};

fn buffer_strategy() -> impl Strategy<Value = RgbBuffer> {
    (0usize..5, 0usize..5, 0u64..10_000).prop_flat_map(|(width, height, request_id)| {
        proptest::collection::vec(any::<u8>(), width * height * 3).prop_map(move |data| {
            RgbBuffer {
                request_id,
                width,
                height,
                data,
            }
        })
    })
}

fn encode(buffers: &[RgbBuffer]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for buffer in buffers {
        bytes.extend(
            format!(
                "rgb buffer {} {} {}\n",
                buffer.width, buffer.height, buffer.request_id
            )
            .into_bytes(),
        );
        bytes.extend(&buffer.data);
    }
    bytes
}

fn decoded(parser: &mut ResponseParser<ResponseEvents>) -> Vec<RgbBuffer> {
    parser
        .observer_mut()
        .drain()
        .filter_map(|event| match event {
            ResponseEvent::RgbBuffer(buffer) => Some(buffer),
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_any_chunking_yields_same_frames(
        buffers in proptest::collection::vec(buffer_strategy(), 0..6),
        chunk_sizes in proptest::collection::vec(1usize..16, 1..64),
    ) {
        let bytes = encode(&buffers);
        let mut parser = ResponseParser::new(ResponseEvents::new());

        let mut offset = 0;
        let mut sizes = chunk_sizes.iter().cycle();
        while offset < bytes.len() {
            let size = *sizes.next().unwrap_or(&1);
            let end = (offset + size).min(bytes.len());
            prop_assert!(parser.write(&bytes[offset..end]).is_ok());
            offset = end;
        }

        prop_assert_eq!(decoded(&mut parser), buffers);
        prop_assert_eq!(parser.buffered_len(), 0);
    }

    #[test]
    fn prop_single_write_drains_everything(
        buffers in proptest::collection::vec(buffer_strategy(), 0..6),
    ) {
        let mut parser = ResponseParser::new(ResponseEvents::new());
        prop_assert!(parser.write(&encode(&buffers)).is_ok());
        prop_assert_eq!(decoded(&mut parser), buffers);
    }

    #[test]
    fn prop_buffer_never_exceeds_bound(
        writes in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..32), 0..32),
        max_buffer_size in 1usize..64,
    ) {
        let mut parser = ResponseParser::new(ResponseEvents::new());
        parser.set_max_buffer_size(max_buffer_size);

        for bytes in &writes {
            let _ = parser.write(bytes);
            prop_assert!(parser.buffered_len() <= max_buffer_size);
        }
    }
}
