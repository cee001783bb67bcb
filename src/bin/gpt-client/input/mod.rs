mod buffer;

pub use buffer::InputBuffer;
