use std::sync::Arc;

use tokio::signal;
use tracing::{error, warn};

use crate::storage::Storage;

pub async fn listen_for_shutdown() {
    // 等待 Ctrl+C 信号
    if let Err(e) = signal::ctrl_c().await {
        // 无法监听信号时交由服务器自身处理退出
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}

/// 服务器停止后释放数据库连接
pub async fn release_storage(storage: Arc<dyn Storage>) {
    match storage.close().await {
        Ok(()) => warn!("Storage connection closed"),
        Err(e) => error!("Failed to close storage: {}", e),
    }
}
