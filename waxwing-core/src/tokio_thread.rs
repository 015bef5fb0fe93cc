use std::pin::Pin;

type Task = Pin<Box<dyn Future<Output = ()> + Send + Sync>>;

/// A dedicated thread running a tokio runtime. The UI thread hands over
/// lookup requests and preview downloads as boxed futures; at most a handful
/// are ever outstanding, so the channel is kept small.
pub struct TokioThread {
    task_tx: tokio::sync::mpsc::Sender<Task>,
    _thread_handle: std::thread::JoinHandle<()>,
}

impl TokioThread {
    pub fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let (task_tx, mut task_rx) = tokio::sync::mpsc::channel::<Task>(16);

        let thread_handle = std::thread::spawn(move || {
            runtime.block_on(async {
                while let Some(task) = task_rx.recv().await {
                    tokio::spawn(task);
                }
            });
        });

        Self {
            task_tx,
            _thread_handle: thread_handle,
        }
    }

    /// Queue a task onto the runtime. Blocks briefly if the channel is full;
    /// must not be called from within the runtime itself.
    pub fn spawn(&self, task: impl Future<Output = ()> + Send + Sync + 'static) {
        self.task_tx.blocking_send(Box::pin(task)).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_tasks_run_on_the_runtime() {
        let tokio_thread = TokioThread::new();
        let (tx, rx) = std::sync::mpsc::channel();
        tokio_thread.spawn(async move {
            tx.send(42u32).unwrap();
        });
        assert_eq!(
            rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap(),
            42
        );
    }
}
