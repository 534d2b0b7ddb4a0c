#![no_main]

use byteflip::convert::bytes::{invert_bytes, to_number, to_number_exact};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };

    let msb = selector & 1 == 1;
    let start = usize::from(selector >> 1);

    let _ = to_number::<i16>(payload, start, msb);
    let _ = to_number::<i32>(payload, start, msb);
    let _ = to_number::<i64>(payload, start, msb);
    let _ = to_number::<u16>(payload, start, msb);
    let _ = to_number::<u32>(payload, start, msb);
    let _ = to_number::<u64>(payload, start, msb);
    let _ = to_number::<f32>(payload, start, msb);
    let _ = to_number::<f64>(payload, start, msb);

    let _ = to_number_exact::<u64>(payload, start, msb);

    let mut buffer = payload.to_vec();
    invert_bytes(&mut buffer);
    invert_bytes(&mut buffer);
    assert_eq!(buffer, payload);
});
