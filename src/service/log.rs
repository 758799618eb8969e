use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::{info, Level};
use std::io::Write;
use std::future::{ready, Ready};
use std::time::Instant;
use actix_web::{
   dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
   Error,
};
use futures_util::future::LocalBoxFuture;

/// Logs every request line and the status it was answered with.
pub struct LoggerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
   S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
   S::Future: 'static,
   B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type InitError = ();
   type Transform = LoggerMiddlewareService<S>;
   type Future = Ready<Result<Self::Transform, Self::InitError>>;

   fn new_transform(&self, service: S) -> Self::Future {
      ready(Ok(LoggerMiddlewareService { service }))
   }
}

pub struct LoggerMiddlewareService<S> {
   service: S
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

   forward_ready!(service);

   fn call(&self, req: ServiceRequest) -> Self::Future {
      let started = Instant::now();
      let request_line = format!("{} {}", req.method(), req.path());
      let fut = self.service.call(req);

      Box::pin(async move {
         let res = fut.await?;
         info!(
            "{} -> {} ({} ms)",
            request_line,
            res.status(),
            started.elapsed().as_millis()
         );
         Ok(res)
      })
   }
}

fn paint(level: Level) -> ColoredString {
   let label = level.to_string();
   match level {
      Level::Error => label.red().bold(),
      Level::Warn => label.yellow().bold(),
      Level::Info => label.green().bold(),
      Level::Debug => label.blue().bold(),
      Level::Trace => label.magenta().bold(),
   }
}

/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logger() {
   Builder::from_env(Env::default().default_filter_or("info"))
   .format(|buf, record| {
      writeln!(
         buf,
         "{} {} [{}] {}",
         chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
         paint(record.level()),
         record.target(),
         record.args()
      )
   })
   .init()
}
