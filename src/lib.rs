pub mod shared {
    pub mod infrastructure {
        pub mod config;
        pub mod logging;
    }
}

pub mod modules {
    pub mod time_logs {
        pub mod core {
            pub mod clock;
            pub mod ports;
            pub mod time_log_entry;
        }
        pub mod use_cases {
            pub mod record_current_time {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_logs {
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod time_logs_in_memory;
                pub mod time_logs_mysql;
            }
        }
    }
}

pub mod shell;
