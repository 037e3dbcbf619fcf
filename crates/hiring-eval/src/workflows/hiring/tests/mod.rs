mod bias;
mod common;
mod routing;
