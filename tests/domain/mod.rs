mod inference_outcome_test;
mod storage_path_test;
