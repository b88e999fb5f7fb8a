mod put;

const HELLO_FRAME: &[u8; 12] = b"blob 5\0hello";
const HELLO_ID: &str = "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0";
