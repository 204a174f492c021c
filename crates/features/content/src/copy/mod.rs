mod de;
mod en;

pub(crate) use de::DE;
pub(crate) use en::EN;
