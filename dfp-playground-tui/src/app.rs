//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     drain_backend(&mut app)                         // 取出后台任务的结果，逐条交给 update
//!     app.tick += 1                                   // 推进加载动画
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此最多等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update::update(&mut app, msg)                   // 更新状态
//!     }
//! }
//!
//!
//! 请求本身跑在 tokio 运行时上（见 backend/playground_service.rs），主循环从不等待网络。
//! 同一标签页的多个请求按到达顺序生效，后到的响应覆盖先到的。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::error::TryRecvError;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用后台结果
        drain_backend(app);
        app.tick = app.tick.wrapping_add(1);

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 取出所有已完成的后台消息
fn drain_backend(app: &mut App) {
    loop {
        match app.inbox.try_recv() {
            Ok(msg) => update::update(app, AppMessage::Backend(msg)),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                // PlaygroundService 持有发送端，正常运行时不会发生
                log::error!("Backend channel closed");
                break;
            }
        }
    }
}
