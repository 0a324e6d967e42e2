pub use self::{
    context::{CancelHandle, Context},
    rpc::RpcClient,
};

mod context;
mod rpc;
