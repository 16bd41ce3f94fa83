mod reports_each_channel_contract;
