mod email_test;
