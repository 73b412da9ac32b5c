use std::fmt::Debug;

use crmd_infra::Context;
use tracing::error;

/// A single reminder operation. Each invocation performs at most one
/// full load-mutate-save cycle against storage.
pub trait UseCase: Debug {
    type Response;
    type Errors;

    fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors>;
}

pub fn execute<U>(mut usecase: U, ctx: &Context) -> Result<U::Response, U::Errors>
where
    U: UseCase,
    U::Errors: Debug,
{
    let res = usecase.execute(ctx);

    if let Err(e) = &res {
        error!("Use case error: {:?}", e);
    }

    res
}
